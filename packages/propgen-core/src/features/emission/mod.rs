//! Emitter
//!
//! Renders a resolved (descriptor, variant) pair into a textual
//! type-augmentation fragment plus its unique identifier. Pure text
//! production; persistence belongs to the host integration shim.

pub mod application;
pub mod domain;

pub use application::{emit, EmitUseCase};
pub use domain::{derive_accessor_name, render_fragment};
