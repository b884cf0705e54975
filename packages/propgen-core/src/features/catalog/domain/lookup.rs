//! Annotation token lookup

use crate::shared::models::AnnotationKind;

/// Read-only catalog of recognized annotation names
///
/// Immutable and shared; lookups are pure with no failure mode beyond
/// "not found".
pub struct AnnotationCatalog;

impl AnnotationCatalog {
    /// Resolve a raw annotation token to its semantic flag
    ///
    /// Accepts the short use-site spelling, an optional `Attribute`
    /// suffix, and an optional namespace qualifier prefix.
    pub fn lookup(token: &str) -> Option<AnnotationKind> {
        let name = Self::simple_name(token);
        match name.strip_suffix("Attribute").unwrap_or(name) {
            "GenerateReadOnly" => Some(AnnotationKind::ReadOnly),
            "GenerateEditorWritable" => Some(AnnotationKind::EditorWritable),
            "GenerateEditorProperty" => Some(AnnotationKind::EditorProperty),
            _ => None,
        }
    }

    /// Check whether a token names a catalog annotation
    pub fn recognizes(token: &str) -> bool {
        Self::lookup(token).is_some()
    }

    /// Strip a dotted qualifier prefix, keeping the final segment
    fn simple_name(token: &str) -> &str {
        token.rsplit('.').next().unwrap_or(token)
    }
}
