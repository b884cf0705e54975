//! Shared models

mod annotation;
mod descriptor;
mod fragment;

pub use annotation::{AnnotationFlags, AnnotationKind};
pub use descriptor::MemberDescriptor;
pub use fragment::GeneratedFragment;
