//! Member Scanner
//!
//! Walks the host's structural view of the program and selects data
//! members carrying at least one catalog annotation. The scanner never
//! touches a host-compiler object model directly; declared members
//! arrive through the `MemberSource` port.

pub mod application;
pub mod infrastructure;
pub mod ports;

pub use application::ScanUseCase;
pub use infrastructure::{FieldDeclaration, ProgramSnapshot, TypeDeclaration};
pub use ports::{DeclaredMember, MemberSource, OwnerType};
