//! Feature modules
//!
//! Vertical slices of the generation pipeline, leaf-first:
//! catalog → scanning → resolution → emission.

pub mod catalog;
pub mod emission;
pub mod resolution;
pub mod scanning;
