//! Catalog domain logic

mod lookup;

pub use lookup::AnnotationCatalog;
