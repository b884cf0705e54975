//! Annotation kinds and flag sets
//!
//! `AnnotationKind` enumerates the three recognized member annotations.
//! `AnnotationFlags` packs the subset present on one member into a u8
//! bitset with set semantics (attaching the same annotation twice
//! contributes its flag once).

use serde::{Deserialize, Serialize};

/// Semantic flag carried by a recognized member annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationKind {
    /// Unconditional read-only accessor
    ReadOnly = 0b001,
    /// Write-only accessor, editor-mode-gated
    EditorWritable = 0b010,
    /// Full read/write accessor, editor-mode-gated
    EditorProperty = 0b100,
}

impl AnnotationKind {
    /// All kinds, in declaration order
    pub const ALL: [AnnotationKind; 3] = [
        AnnotationKind::ReadOnly,
        AnnotationKind::EditorWritable,
        AnnotationKind::EditorProperty,
    ];
}

/// Set of annotation flags present on one member
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnnotationFlags(pub u8);

impl AnnotationFlags {
    pub fn new() -> Self {
        Self(0)
    }

    /// Set containing a single kind
    pub fn single(kind: AnnotationKind) -> Self {
        Self(kind as u8)
    }

    pub fn add(&mut self, kind: AnnotationKind) {
        self.0 |= kind as u8;
    }

    pub fn has(&self, kind: AnnotationKind) -> bool {
        self.0 & (kind as u8) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Kinds present in this set, in declaration order
    pub fn kinds(&self) -> impl Iterator<Item = AnnotationKind> + '_ {
        AnnotationKind::ALL.into_iter().filter(|k| self.has(*k))
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
}

impl FromIterator<AnnotationKind> for AnnotationFlags {
    fn from_iter<I: IntoIterator<Item = AnnotationKind>>(iter: I) -> Self {
        let mut flags = AnnotationFlags::new();
        for kind in iter {
            flags.add(kind);
        }
        flags
    }
}
