//! Search command implementation

use crate::cli::{build_dashboard, parse_field, OutputFormat, SearchArgs};
use crate::controller::SEARCH_FAILED_PROMPT;
use crate::core::error::{Error, Result};
use crate::output::format_rows;
use crate::surface::events::SurfaceEvent;
use tracing::info;

/// Run the search command
pub async fn run(args: SearchArgs) -> Result<()> {
    let mut controller = build_dashboard(args.url.as_deref())?;

    // form fields serialize in declaration order, like the page form
    let form = controller.form_mut();
    if let Some(location) = &args.location {
        form.append("location", location);
    }
    if let Some(thing_type) = &args.thing_type {
        form.append("thing_type", thing_type);
    }
    if let Some(thing_id) = &args.thing_id {
        form.append("thing_id", thing_id);
    }
    for raw in &args.fields {
        let (name, value) = parse_field(raw)?;
        form.append(name, value);
    }

    let trigger = controller.trigger().id().clone();
    controller.handle_event(&SurfaceEvent::click(trigger)).await;

    if !controller.result_view().is_visible() {
        return Err(Error::Request {
            message: SEARCH_FAILED_PROMPT.to_string(),
        });
    }

    let rows = controller.result_view().table().rows();
    info!(results = rows.len(), "search finished");

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };
    print!("{}", format_rows(rows, format));
    if args.json {
        println!();
    }

    Ok(())
}
