//! CLI command definitions and handlers

pub mod inspect;
pub mod search;

use crate::api::HttpBackend;
use crate::controller::{DashboardSurfaces, SearchController};
use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::formatter::{JsonFormatter, ViewMode};
use crate::surface::TextSurface;
use clap::{Parser, Subcommand};

/// Thing Directory search dashboard client
#[derive(Parser, Debug)]
#[command(name = "thingdash")]
#[command(author, version)]
#[command(about = "Search a Thing Directory and inspect thing descriptions")]
#[command(after_help = "EXAMPLES:
    thingdash search                        List everything the directory knows
    thingdash search --type Sensor          Only things of type 'Sensor'
    thingdash search --id t1 --json         One thing, as JSON
    thingdash inspect t1                    Full thing description, formatted

The directory base URL comes from --url, the THINGDASH_URL environment
variable, or defaults to http://localhost:5000.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the directory and print the result table
    #[command(visible_alias = "s")]
    Search(SearchArgs),

    /// Fetch one thing description and render it
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),
}

/// Arguments for the search command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:
    thingdash search --type Sensor           Things of one type
    thingdash search --location lab-3        Search from another directory
    thingdash search -F publicity=2          Arbitrary form field
    thingdash search --json                  Raw JSON output")]
pub struct SearchArgs {
    /// Directory location to search from
    #[arg(long)]
    pub location: Option<String>,

    /// Only return things of this type
    #[arg(long = "type", value_name = "TYPE")]
    pub thing_type: Option<String>,

    /// Only return the thing with this id
    #[arg(long = "id", value_name = "ID")]
    pub thing_id: Option<String>,

    /// Extra form field as NAME=VALUE (repeatable)
    #[arg(short = 'F', long = "field", value_name = "NAME=VALUE")]
    pub fields: Vec<String>,

    /// JSON output
    #[arg(long)]
    pub json: bool,

    /// Directory base URL (overrides THINGDASH_URL)
    #[arg(long)]
    pub url: Option<String>,
}

/// Arguments for the inspect command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:
    thingdash inspect t1             Pretty-printed thing description
    thingdash inspect t1 --markup    Span-annotated markup instead")]
pub struct InspectArgs {
    /// Thing id to inspect
    pub thing_id: String,

    /// Print span-annotated markup instead of plain text
    #[arg(long)]
    pub markup: bool,

    /// Directory base URL (overrides THINGDASH_URL)
    #[arg(long)]
    pub url: Option<String>,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Build a dashboard controller against a real directory
///
/// The CLI plays the embedding application: it owns the surface construction
/// and the controller's lifetime, the way a web shell would.
pub fn build_dashboard(url: Option<&str>) -> Result<SearchController<HttpBackend>> {
    let backend = HttpBackend::new(&Config::base_url(url))?;
    let formatter = JsonFormatter::with_mode(
        TextSurface::new("json-thingdescription"),
        ViewMode::ReadOnly,
    );
    Ok(SearchController::new(
        backend,
        formatter,
        DashboardSurfaces::with_default_ids(),
    ))
}

/// Split a `NAME=VALUE` form-field argument
pub fn parse_field(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => Err(Error::Config {
            message: format!("invalid form field '{raw}', expected NAME=VALUE"),
        }),
    }
}
