//! Shared crate-wide constants for launchcheck.
//!
//! Centralizes magic values and default tables used across modules.
//! Adjusting these here will propagate through the crate.

use crate::types::report::FileKind;

/// Subsystem tag stamped on every emitted fact.
pub const SUBSYSTEM: &str = "launchcheck";

/// UUIDv5 namespace tag for deterministic run IDs.
pub const NS_TAG: &str = "https://launchcheck/verify";

/// Default required-file table checked by `Verifier::verify`, with the content
/// family each file is validated as.
pub const REQUIRED_FILES: &[(&str, FileKind)] = &[
    ("index.html", FileKind::Html),
    ("script.js", FileKind::Script),
    ("styles.css", FileKind::Stylesheet),
];

/// Entry page whose markup must reference the other bundle assets.
pub const ENTRY_PAGE: &str = "index.html";

/// Assets that must be referenced from the entry page.
pub const REFERENCED_ASSETS: &[&str] = &["script.js", "styles.css"];
