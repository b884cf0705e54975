//! Emission use cases

mod emit;

pub use emit::{emit, EmitUseCase};
