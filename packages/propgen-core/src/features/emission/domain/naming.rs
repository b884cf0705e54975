//! Accessor name derivation

/// Derive the public accessor name from a declared member name
///
/// Strips a single leading underscore (if present) and upper-cases the
/// first remaining character. No case-splitting, no pluralization.
/// A member whose name is empty after stripping (a bare `_`) falls back
/// to the raw declared name.
pub fn derive_accessor_name(member_name: &str) -> String {
    let stripped = member_name.strip_prefix('_').unwrap_or(member_name);
    let name = if stripped.is_empty() { member_name } else { stripped };

    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
