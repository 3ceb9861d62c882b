//! Thingdash - client-side controller for a Thing Directory dashboard
//!
//! A headless search-and-inspect controller: it serializes a query form,
//! calls the directory's search endpoint, renders result rows into a table
//! model, and routes one row's full thing description into a JSON formatter
//! bound to a detail dialog. The embedding application owns the surfaces and
//! presents them however it likes; the bundled CLI prints them to a terminal.

pub mod api;
pub mod cli;
pub mod controller;
pub mod core;
pub mod formatter;
pub mod output;
pub mod search;
pub mod surface;

pub use crate::core::config::Config;
pub use crate::core::error::{Error, Result};
pub use controller::SearchController;
pub use formatter::{JsonFormatter, ViewMode};
