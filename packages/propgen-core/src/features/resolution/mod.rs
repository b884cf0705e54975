//! Resolution Engine
//!
//! Maps a member's annotation flag set to exactly one accessor variant.

pub mod domain;

pub use domain::{resolve, Variant};
