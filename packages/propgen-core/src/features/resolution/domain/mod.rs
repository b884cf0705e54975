//! Resolution domain logic

mod variant;

pub use variant::{resolve, Variant};
