//! Scanning infrastructure adapters

mod snapshot;

pub use snapshot::{FieldDeclaration, ProgramSnapshot, TypeDeclaration};
