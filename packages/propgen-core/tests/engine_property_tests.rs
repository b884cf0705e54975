//! Property-based tests for the generation engine
//!
//! Invariants that should hold for all inputs:
//! - Totality: every non-empty flag set resolves to exactly one variant
//! - Purity: resolve and emit are deterministic
//! - Uniqueness: distinct members never collide on unique ids
//! - Idempotence: a pass over an unchanged snapshot reproduces itself

use proptest::prelude::*;

use propgen_core::{
    derive_accessor_name, generate, resolve, AnnotationFlags, FieldDeclaration, GenerationConfig,
    ProgramSnapshot, TypeDeclaration, Variant,
};

proptest! {
    #[test]
    fn prop_resolve_is_total_and_pure(bits in 1u8..=7) {
        let flags = AnnotationFlags(bits);
        let variant = resolve(flags);
        prop_assert_eq!(variant, resolve(flags));
        prop_assert!(matches!(
            variant,
            Variant::ReadOnly | Variant::EditorProperty | Variant::EditorWritable | Variant::Hybrid
        ));
    }

    #[test]
    fn prop_name_derivation_strips_one_underscore(name in "[a-z][a-zA-Z0-9]{0,12}") {
        let from_field = derive_accessor_name(&format!("_{}", name));
        let from_plain = derive_accessor_name(&name);
        prop_assert_eq!(from_field, from_plain);
    }

    #[test]
    fn prop_accessor_name_capitalizes_first_char(name in "_?[a-z][a-zA-Z0-9]{0,12}") {
        let derived = derive_accessor_name(&name);
        let first = derived.chars().next().unwrap();
        prop_assert!(first.is_ascii_uppercase());
    }

    #[test]
    fn prop_distinct_members_have_distinct_ids(
        names in prop::collection::hash_set("[a-z]{1,8}", 1..10),
        bits in 1u8..=7,
    ) {
        let mut ty = TypeDeclaration::new("Sample", "Entity");
        for name in &names {
            let mut field = FieldDeclaration::new(format!("_{}", name), "int");
            let flags = AnnotationFlags(bits);
            field.annotations = flags
                .kinds()
                .map(|kind| {
                    match kind {
                        propgen_core::AnnotationKind::ReadOnly => "GenerateReadOnly",
                        propgen_core::AnnotationKind::EditorWritable => "GenerateEditorWritable",
                        propgen_core::AnnotationKind::EditorProperty => "GenerateEditorProperty",
                    }
                    .to_string()
                })
                .collect();
            ty.fields.push(field);
        }

        let snapshot = ProgramSnapshot::new(vec![ty]);
        let fragments = generate(&snapshot, &GenerationConfig::default()).unwrap();
        prop_assert_eq!(fragments.len(), names.len());

        let mut ids: Vec<_> = fragments.iter().map(|f| f.unique_id.clone()).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), fragments.len());
    }

    #[test]
    fn prop_generation_pass_is_idempotent(
        names in prop::collection::hash_set("[a-z]{1,8}", 0..6),
    ) {
        let mut ty = TypeDeclaration::new("Sample", "Entity");
        for name in &names {
            ty.fields.push(
                FieldDeclaration::new(format!("_{}", name), "int")
                    .with_annotations(&["GenerateReadOnly"]),
            );
        }
        let snapshot = ProgramSnapshot::new(vec![ty]);
        let config = GenerationConfig::default();

        let first = generate(&snapshot, &config).unwrap();
        let second = generate(&snapshot, &config).unwrap();
        prop_assert_eq!(first, second);
    }
}
