//! Pipeline orchestration

pub mod processor;

pub use processor::{generate, generate_from_json};
