//! Emission domain logic

mod naming;
mod templates;

pub use naming::derive_accessor_name;
pub use templates::render_fragment;
