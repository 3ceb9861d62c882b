//! Search result model

pub mod results;

pub use results::{parse_hits, SearchHit, ThingRecord};
