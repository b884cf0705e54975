//! Generated fragment
//!
//! The emitter's sole output artifact: one augmentation text plus the
//! deterministic identifier the host files it under.

use serde::{Deserialize, Serialize};

/// One generated type-augmentation fragment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratedFragment {
    /// `{owner_type_name}_{member_name}_{variant label}`; unique within a
    /// pass, stable across passes
    pub unique_id: String,
    /// Rendered augmentation body
    pub text: String,
}

impl GeneratedFragment {
    pub fn new(unique_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            unique_id: unique_id.into(),
            text: text.into(),
        }
    }

    /// File name the host persists this fragment under
    pub fn hint_name(&self, suffix: &str) -> String {
        format!("{}{}", self.unique_id, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_name() {
        let fragment = GeneratedFragment::new("Entity__id_GenerateReadOnlyProperty", "text");
        assert_eq!(
            fragment.hint_name(".g.cs"),
            "Entity__id_GenerateReadOnlyProperty.g.cs"
        );
    }
}
