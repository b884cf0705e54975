//! Scanning ports

mod member_source;

pub use member_source::{DeclaredMember, MemberSource, OwnerType};
