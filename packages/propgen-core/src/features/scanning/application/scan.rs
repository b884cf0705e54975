//! Scan use case
//!
//! Filters declared members down to generation candidates and builds
//! one `MemberDescriptor` per selected member.

use tracing::debug;

use crate::features::catalog::AnnotationCatalog;
use crate::features::scanning::ports::{DeclaredMember, MemberSource};
use crate::shared::models::{AnnotationFlags, MemberDescriptor};

/// Build a descriptor from one declared member, or `None` if it is not
/// a generation candidate
///
/// A member is selected iff its owner resolves to a named type and at
/// least one attached annotation token resolves via the catalog.
pub fn scan_member(member: &DeclaredMember) -> Option<MemberDescriptor> {
    let flags: AnnotationFlags = member
        .annotations
        .iter()
        .filter_map(|token| AnnotationCatalog::lookup(token))
        .collect();

    if flags.is_empty() {
        return None;
    }

    let owner = match &member.owner {
        Some(owner) => owner,
        None => {
            // Expected transient state during incomplete edits.
            debug!(member = %member.name, "dropping member with unresolved owner");
            return None;
        }
    };

    Some(MemberDescriptor {
        owner_namespace: owner.namespace.clone(),
        owner_type_name: owner.name.clone(),
        owner_generic_parameters: owner.generic_parameters.clone(),
        member_name: member.name.clone(),
        value_type_display: member.value_type.clone(),
        flags,
    })
}

/// Scan use case
pub struct ScanUseCase<S: MemberSource> {
    source: S,
}

impl<S: MemberSource> ScanUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Execute the scan, yielding one descriptor per selected member
    pub fn execute(&self) -> Vec<MemberDescriptor> {
        scan(&self.source)
    }
}

/// Scan every declared member of a source
pub fn scan<S: MemberSource>(source: &S) -> Vec<MemberDescriptor> {
    source
        .declared_members()
        .filter_map(|member| scan_member(&member))
        .collect()
}
