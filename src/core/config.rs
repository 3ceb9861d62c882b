//! Configuration: endpoint paths and base-URL resolution

/// Search endpoint, GET with a form-encoded query string
pub const SEARCH_API: &str = "/api/search";
/// Registration endpoint, POST with a thing description body
pub const REGISTER_API: &str = "/api/register";
/// Deletion endpoint, keyed by thing id
pub const DELETE_API: &str = "/api/delete";
/// Relocation endpoint, moves a thing description between directories
pub const RELOCATE_API: &str = "/api/relocate";
/// Arbitrary query-script execution endpoint
pub const CUSTOM_QUERY_API: &str = "/api/custom_query";

/// Default directory base URL when neither flag nor env is set
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

pub struct Config;

impl Config {
    /// Resolve the directory base URL: explicit flag wins, then the
    /// `THINGDASH_URL` environment variable, then the default.
    pub fn base_url(flag: Option<&str>) -> String {
        if let Some(url) = flag {
            return url.to_string();
        }
        if let Ok(url) = std::env::var("THINGDASH_URL") {
            if !url.trim().is_empty() {
                return url;
            }
        }
        DEFAULT_BASE_URL.to_string()
    }
}
