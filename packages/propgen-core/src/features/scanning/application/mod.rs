//! Scanning use cases

mod scan;

pub use scan::{scan, scan_member, ScanUseCase};
