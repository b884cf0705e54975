//! Generation pipeline
//!
//! Orchestrates scan → resolve → emit for one pass. The per-member
//! transformation is stateless with no cross-member dependencies, so
//! descriptors fan out over Rayon. Output is normalized by unique id,
//! keeping a pass byte-reproducible regardless of scheduling.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::GenerationConfig;
use crate::errors::Result;
use crate::features::emission::emit;
use crate::features::resolution::resolve;
use crate::features::scanning::application::scan;
use crate::features::scanning::{MemberSource, ProgramSnapshot};
use crate::shared::models::GeneratedFragment;

/// Run one generation pass over a member source
pub fn generate<S: MemberSource>(
    source: &S,
    config: &GenerationConfig,
) -> Result<Vec<GeneratedFragment>> {
    config.validate()?;

    let descriptors = scan(source);
    info!(members = descriptors.len(), "scanned generation candidates");

    let mut fragments: Vec<GeneratedFragment> = descriptors
        .par_iter()
        .map(|descriptor| {
            let variant = resolve(descriptor.flags);
            debug!(
                owner = %descriptor.owner_type_name,
                member = %descriptor.member_name,
                variant = ?variant,
                "resolved accessor variant"
            );
            emit(descriptor, variant, config)
        })
        .collect();

    fragments.sort_by(|a, b| a.unique_id.cmp(&b.unique_id));
    info!(fragments = fragments.len(), "generation pass complete");
    Ok(fragments)
}

/// Run one generation pass over a JSON-encoded program snapshot
pub fn generate_from_json(json: &str, config: &GenerationConfig) -> Result<Vec<GeneratedFragment>> {
    let snapshot = ProgramSnapshot::from_json(json)?;
    generate(&snapshot, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::scanning::{FieldDeclaration, TypeDeclaration};

    fn snapshot() -> ProgramSnapshot {
        ProgramSnapshot::new(vec![TypeDeclaration::new("Sample", "Entity")
            .with_field(FieldDeclaration::new("_id", "int").with_annotations(&["GenerateReadOnly"]))
            .with_field(
                FieldDeclaration::new("_name", "string?")
                    .with_annotations(&["GenerateEditorProperty"]),
            )])
    }

    #[test]
    fn test_generate_yields_one_fragment_per_candidate() {
        let fragments = generate(&snapshot(), &GenerationConfig::default()).unwrap();
        assert_eq!(fragments.len(), 2);
    }

    #[test]
    fn test_output_is_sorted_by_unique_id() {
        let fragments = generate(&snapshot(), &GenerationConfig::default()).unwrap();
        let ids: Vec<_> = fragments.iter().map(|f| f.unique_id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_invalid_config_fails_the_pass() {
        let config = GenerationConfig {
            editor_flag: "NOT A SYMBOL".to_string(),
            ..Default::default()
        };
        assert!(generate(&snapshot(), &config).is_err());
    }
}
