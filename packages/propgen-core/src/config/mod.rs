//! Generation configuration
//!
//! Two knobs, both defaulting to the behavior of the original Unity
//! setup: the conditional-compilation guard symbol the emitter renders
//! (`UNITY_EDITOR`) and the file suffix the host appends to fragment
//! hint names (`.g.cs`). Loadable from YAML for host toolchains that
//! carry their settings that way.

use serde::{Deserialize, Serialize};

use crate::errors::{PropgenError, Result};

/// Engine configuration for one generation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Conditional-compilation symbol gating editor-mode accessors
    pub editor_flag: String,
    /// Suffix appended to fragment unique ids to form host file names
    pub hint_suffix: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            editor_flag: "UNITY_EDITOR".to_string(),
            hint_suffix: ".g.cs".to_string(),
        }
    }
}

impl GenerationConfig {
    /// Load and validate a configuration from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Validate the configuration
    ///
    /// The guard symbol ends up inside `#if` directives, so it must be a
    /// plain identifier.
    pub fn validate(&self) -> Result<()> {
        if !is_identifier(&self.editor_flag) {
            return Err(PropgenError::config(format!(
                "editor_flag '{}' is not a valid conditional-compilation symbol",
                self.editor_flag
            )));
        }
        Ok(())
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
