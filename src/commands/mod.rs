//! Top-level subcommand orchestration.

pub mod scan;
pub mod version;
