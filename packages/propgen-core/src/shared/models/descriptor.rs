//! Member descriptor
//!
//! One `MemberDescriptor` is built per annotated data member selected by
//! the scanner. Immutable once built; lives for a single generation pass.

use serde::{Deserialize, Serialize};

use super::annotation::AnnotationFlags;

/// Structural metadata for one annotated data member
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberDescriptor {
    /// Containing namespace; empty string for the global namespace
    pub owner_namespace: String,
    /// Name of the owning type (without generic parameters)
    pub owner_type_name: String,
    /// Generic parameter names in declaration order; empty if non-generic
    pub owner_generic_parameters: Vec<String>,
    /// Member name as declared (e.g. `_id`)
    pub member_name: String,
    /// Fully qualified display form of the member's declared type
    pub value_type_display: String,
    /// Catalog flags present on this member (never empty by construction)
    pub flags: AnnotationFlags,
}

impl MemberDescriptor {
    /// Owner type name with its generic parameter list, as it appears in
    /// a re-opened partial declaration (e.g. `Entity<T, U>`)
    pub fn owner_type_display(&self) -> String {
        if self.owner_generic_parameters.is_empty() {
            self.owner_type_name.clone()
        } else {
            format!(
                "{}<{}>",
                self.owner_type_name,
                self.owner_generic_parameters.join(", ")
            )
        }
    }
}
