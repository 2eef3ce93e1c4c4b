use std::fs;

use crate::types::errors::{Error, ErrorKind, Result};
use crate::types::pathguard::PathGuard;

/// Best-effort existence probe. Returns `false` when the candidate fails
/// containment validation or the file cannot be stat'ed.
pub fn file_exists(guard: &PathGuard, candidate: &str) -> bool {
    match guard.validate(candidate) {
        Ok(p) => fs::metadata(p).is_ok(),
        Err(_) => false,
    }
}

/// Best-effort non-empty probe. Returns `true` only for a validated path whose
/// metadata reports a length greater than zero.
pub fn file_not_empty(guard: &PathGuard, candidate: &str) -> bool {
    match guard.validate(candidate) {
        Ok(p) => fs::metadata(p).map(|m| m.len() > 0).unwrap_or(false),
        Err(_) => false,
    }
}

/// Read a contained file to a string.
///
/// Containment failures keep their `AccessDenied` kind from the guard; read
/// failures after validation map to `ErrorKind::Io`.
pub fn read_file(guard: &PathGuard, candidate: &str) -> Result<String> {
    let path = guard.validate(candidate)?;
    fs::read_to_string(&path).map_err(|e| Error {
        kind: ErrorKind::Io,
        msg: format!("{}: {e}", path.display()),
    })
}
