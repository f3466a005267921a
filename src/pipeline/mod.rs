//! Read orchestration: load, summarize, export

pub mod orchestrator;

pub use orchestrator::{format_cue_kinds, run, ReadResult};
