//! Accessor variant resolution
//!
//! The precedence table here is the core design decision of the engine:
//! annotation flags can legitimately combine, and every non-empty
//! combination must map to exactly one accessor shape.

use serde::{Deserialize, Serialize};

use crate::shared::models::{AnnotationFlags, AnnotationKind};

/// Accessor shape resolved from a member's flag set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Unconditional getter, no setter ever
    ReadOnly,
    /// Getter+setter, whole fragment gated on the editor-mode flag
    EditorProperty,
    /// Setter only, gated on the editor-mode flag
    EditorWritable,
    /// Getter+setter under the flag, getter-only under its inverse
    Hybrid,
}

impl Variant {
    /// Stable label used in fragment unique ids
    pub fn label(&self) -> &'static str {
        match self {
            Variant::ReadOnly => "GenerateReadOnlyProperty",
            Variant::EditorProperty => "GenerateEditorProperty",
            Variant::EditorWritable => "GenerateEditorWritableProperty",
            Variant::Hybrid => "GenerateHybridProperty",
        }
    }
}

/// Resolve a flag set to its accessor variant
///
/// Precedence, first match wins:
/// 1. ReadOnly + EditorProperty  → Hybrid (read-only dominance:
///    EditorProperty is absorbed into the writable half of the hybrid,
///    it does not get its own emission)
/// 2. ReadOnly + EditorWritable  → Hybrid
/// 3. EditorProperty             → EditorProperty
/// 4. EditorWritable             → EditorWritable
/// 5. otherwise                  → ReadOnly
///
/// Total over every non-empty flag set.
pub fn resolve(flags: AnnotationFlags) -> Variant {
    debug_assert!(!flags.is_empty(), "scanner selects members with >=1 flag");

    let read_only = flags.has(AnnotationKind::ReadOnly);
    if read_only && flags.has(AnnotationKind::EditorProperty) {
        Variant::Hybrid
    } else if read_only && flags.has(AnnotationKind::EditorWritable) {
        Variant::Hybrid
    } else if flags.has(AnnotationKind::EditorProperty) {
        Variant::EditorProperty
    } else if flags.has(AnnotationKind::EditorWritable) {
        Variant::EditorWritable
    } else {
        Variant::ReadOnly
    }
}
