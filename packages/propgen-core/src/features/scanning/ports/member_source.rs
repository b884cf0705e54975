//! Member Source Port
//!
//! Defines the contract between the scanner and the host integration
//! shim. The host exposes every declared data member together with its
//! attached annotation tokens and resolved type metadata; the scanner
//! decides which of them are generation candidates.

use serde::{Deserialize, Serialize};

/// Named owning type of a declared member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerType {
    /// Containing namespace; empty for the global namespace
    #[serde(default)]
    pub namespace: String,
    /// Type name without generic parameters
    pub name: String,
    /// Generic parameter names in declaration order
    #[serde(default)]
    pub generic_parameters: Vec<String>,
}

impl OwnerType {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            generic_parameters: Vec::new(),
        }
    }

    pub fn with_generics(mut self, parameters: &[&str]) -> Self {
        self.generic_parameters = parameters.iter().map(|p| p.to_string()).collect();
        self
    }
}

/// Host-neutral view of one declared data member
///
/// `owner` is `None` when the member's containing construct does not
/// resolve to a named type symbol (local or anonymous constructs during
/// incomplete edits); such members are non-candidates, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredMember {
    pub owner: Option<OwnerType>,
    /// Member name as declared
    pub name: String,
    /// Fully qualified display form of the declared type
    pub value_type: String,
    /// Raw annotation tokens attached in source, in source order
    #[serde(default)]
    pub annotations: Vec<String>,
}

/// Port supplying declared members from the host's program snapshot
///
/// Implementations are read-only traversals; each generation pass
/// re-enumerates from the current snapshot.
pub trait MemberSource {
    /// Enumerate every declared data member in the program
    fn declared_members(&self) -> Box<dyn Iterator<Item = DeclaredMember> + '_>;
}
