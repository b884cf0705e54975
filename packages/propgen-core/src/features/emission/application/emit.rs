//! Emit use case
//!
//! Turns one resolved (descriptor, variant) pair into a
//! `GeneratedFragment`. No filesystem access and no shared state; the
//! host persists fragments under `hint_name`.

use crate::config::GenerationConfig;
use crate::features::emission::domain::render_fragment;
use crate::features::resolution::Variant;
use crate::shared::models::{GeneratedFragment, MemberDescriptor};

/// Emit the fragment for one resolved member
pub fn emit(
    descriptor: &MemberDescriptor,
    variant: Variant,
    config: &GenerationConfig,
) -> GeneratedFragment {
    let unique_id = format!(
        "{}_{}_{}",
        descriptor.owner_type_name,
        descriptor.member_name,
        variant.label()
    );
    let text = render_fragment(descriptor, variant, &config.editor_flag);
    GeneratedFragment::new(unique_id, text)
}

/// Emit use case
pub struct EmitUseCase<'a> {
    config: &'a GenerationConfig,
}

impl<'a> EmitUseCase<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }

    /// Execute the emit operation
    pub fn execute(&self, descriptor: &MemberDescriptor, variant: Variant) -> GeneratedFragment {
        emit(descriptor, variant, self.config)
    }
}
