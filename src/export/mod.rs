//! Export of parsed library records

pub mod json;

pub use json::{read_json, write_json};
