/*
 * Propgen Core - Property Accessor Generation Engine
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (MemberDescriptor, GeneratedFragment, AnnotationFlags)
 * - features/    : Vertical slices (catalog → scanning → resolution → emission)
 * - pipeline/    : Orchestration (scan → resolve → emit)
 * - config/      : Generation configuration (guard symbol, hint naming)
 *
 * The engine is host-neutral: declared members arrive through the
 * `MemberSource` port, rendered fragments leave as (unique_id, text)
 * pairs. The host toolchain owns persistence and compilation.
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (catalog, scanning, resolution, emission)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::GenerationConfig;
pub use errors::{PropgenError, Result};
pub use features::catalog::AnnotationCatalog;
pub use features::emission::{derive_accessor_name, EmitUseCase};
pub use features::resolution::{resolve, Variant};
pub use features::scanning::{
    DeclaredMember, FieldDeclaration, MemberSource, OwnerType, ProgramSnapshot, ScanUseCase,
    TypeDeclaration,
};
pub use pipeline::{generate, generate_from_json};
pub use shared::models::{AnnotationFlags, AnnotationKind, GeneratedFragment, MemberDescriptor};
