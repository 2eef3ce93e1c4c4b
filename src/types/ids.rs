//! Deterministic UUIDv5 identifiers for verification runs.
//!
//! The UUID namespace is derived from a stable tag (`NS_TAG`) so that `run_id`
//! is reproducible across runs for the same required-file table.
use uuid::Uuid;

use super::report::FileKind;
use crate::constants::NS_TAG;

/// Internal: return the UUID namespace used for deterministic IDs.
fn namespace() -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, NS_TAG.as_bytes())
}

/// Compute a deterministic UUIDv5 for a run by serializing the required-file
/// table in order.
///
/// Two runs over identical tables (including ordering) share the same
/// `run_id`, independent of the base directory being verified.
#[must_use]
pub fn run_id(files: &[(String, FileKind)]) -> Uuid {
    let ns = namespace();
    let mut s = String::new();
    for (path, kind) in files {
        s.push_str(path);
        s.push(':');
        s.push_str(kind.as_str());
        s.push('\n');
    }
    Uuid::new_v5(&ns, s.as_bytes())
}
