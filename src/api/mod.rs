//! Directory API access: query-string building and the HTTP client

pub mod client;
pub mod form;

pub use client::{HttpBackend, SearchBackend};
pub use form::QueryForm;
