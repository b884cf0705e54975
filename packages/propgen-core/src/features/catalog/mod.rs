//! Annotation Catalog
//!
//! Fixed lookup from raw annotation tokens to `AnnotationKind`. Hosts
//! report attribute names either as written at the use site
//! (`GenerateReadOnly`) or as fully qualified display strings
//! (`PropertyGenerators.GenerateReadOnlyAttribute`); both spellings
//! resolve to the same kind. Unrecognized tokens yield `None` and are
//! silently ignored by the scanner.

pub mod domain;

pub use domain::AnnotationCatalog;
