use std::path::{Component, Path, PathBuf};

use super::errors::{Error, ErrorKind, Result};

/// Confines path resolution to a fixed base directory.
///
/// The base is supplied explicitly at construction and never mutated, so tests
/// can build guards over arbitrary directories without touching process state.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathGuard {
    /// Lexically normalized absolute base directory.
    base: PathBuf,
}

impl PathGuard {
    /// Creates a guard over `base`.
    ///
    /// Fails with `ErrorKind::InvalidPath` when `base` is not absolute; a
    /// relative base is rejected rather than resolved against the working
    /// directory, keeping validation a pure computation.
    pub fn new(base: &Path) -> Result<Self> {
        if !base.is_absolute() {
            return Err(Error {
                kind: ErrorKind::InvalidPath,
                msg: "base directory must be absolute".into(),
            });
        }
        Ok(Self {
            base: normalize(base),
        })
    }

    /// Returns the guarded base directory.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Resolve `candidate` against the base directory and enforce containment.
    ///
    /// The candidate is joined to the base (an absolute candidate replaces it),
    /// `.`/`..` segments are collapsed lexically without touching the
    /// filesystem, and the result is accepted iff it equals the base or sits
    /// strictly below it. On violation this fails with
    /// `ErrorKind::AccessDenied`; no other error kind is produced here.
    ///
    /// Percent-encoded sequences are not decoded; they are ordinary path
    /// components. Symlinks are not resolved, so containment is lexical only.
    pub fn validate(&self, candidate: &str) -> Result<PathBuf> {
        let resolved = normalize(&self.base.join(candidate));
        if resolved.starts_with(&self.base) {
            Ok(resolved)
        } else {
            Err(Error {
                kind: ErrorKind::AccessDenied,
                msg: format!("path escapes base directory: {candidate}"),
            })
        }
    }
}

/// Collapse `.` and `..` segments lexically. `..` at the filesystem root stays
/// at the root, matching resolver semantics on both Unix and Windows.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for seg in path.components() {
        match seg {
            Component::Prefix(_) | Component::RootDir => out.push(seg.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(p) => out.push(p),
        }
    }
    out
}
