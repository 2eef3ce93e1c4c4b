// Facade for API module; delegates to submodules under src/api/

use crate::constants::REQUIRED_FILES;
use crate::logging::{AuditSink, FactsEmitter};
use crate::types::pathguard::PathGuard;
use crate::types::report::{FileKind, VerifyReport};

pub mod errors;
mod run;

/// Drives one launch-verification pass over a guarded bundle directory.
///
/// The guard is supplied at construction; every probe of the run resolves its
/// path through it. Facts and audit lines go to the caller-provided sinks.
pub struct Verifier<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    guard: PathGuard,
    files: Vec<(String, FileKind)>,
    redact: bool,
}

impl<E: FactsEmitter, A: AuditSink> Verifier<E, A> {
    pub fn new(facts: E, audit: A, guard: PathGuard) -> Self {
        Self {
            facts,
            audit,
            guard,
            files: REQUIRED_FILES
                .iter()
                .map(|(p, k)| ((*p).to_string(), *k))
                .collect(),
            redact: false,
        }
    }

    /// Replace the default required-file table.
    pub fn with_files(mut self, files: Vec<(String, FileKind)>) -> Self {
        self.files = files;
        self
    }

    /// Zero timestamps and drop volatile fields from emitted facts, so fact
    /// streams compare byte-for-byte across runs.
    pub fn with_redaction(mut self, redact: bool) -> Self {
        self.redact = redact;
        self
    }

    pub fn guard(&self) -> &PathGuard {
        &self.guard
    }

    /// Run all checks and collect the aggregate report. Per-file failures are
    /// recorded as stops; the pass itself always completes.
    pub fn verify(&self) -> VerifyReport {
        run::run(self)
    }
}
