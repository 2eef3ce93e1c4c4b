#![forbid(unsafe_code)]
//! Launchcheck: path-contained launch verification for static web bundles.
//!
//! Safety model highlights:
//! - Every filesystem probe goes through `PathGuard`, which resolves caller-supplied
//!   paths lexically against a fixed base directory and rejects anything that would
//!   land outside it.
//! - Validation is a pure path-string computation; no symlink resolution is performed
//!   (a documented limitation, not a guarantee).
//! - Each file check is independent: one denied or missing path never aborts the
//!   remaining checks of a verification run.

pub mod constants;
pub mod ansi_colors;
pub mod api;
pub mod checks;
pub mod logging;
pub mod types;

pub use api::*;
