//! Best-effort bundle checks.
//!
//! Every probe routes its path through `PathGuard` first. Probes degrade to
//! `false` on denial or filesystem trouble so that one bad path never aborts
//! the remaining checks of a run.

pub mod content;
pub mod fs;

// Re-export common helpers for convenience
pub use content::report_for;
pub use fs::{file_exists, file_not_empty, read_file};
