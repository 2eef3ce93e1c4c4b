//! The verification pass: per-file scan rows, entry-page reference checks,
//! and the summary fact.

use log::Level;
use serde_json::json;

use crate::checks;
use crate::constants::{ENTRY_PAGE, REFERENCED_ASSETS};
use crate::logging::audit::AuditCtx;
use crate::logging::{now_iso, AuditSink, Decision, FactsEmitter, StageLogger, TS_ZERO};
use crate::types::ids::run_id;
use crate::types::report::{FileKind, FileReport, ReferenceReport, VerifyReport};

use super::Verifier;

pub(super) fn run<E: FactsEmitter, A: AuditSink>(v: &Verifier<E, A>) -> VerifyReport {
    let rid = run_id(&v.files).to_string();
    let ts = if v.redact {
        TS_ZERO.to_string()
    } else {
        now_iso()
    };
    let ctx = AuditCtx::new(&v.facts, rid.clone(), ts, v.redact);
    let slog = StageLogger::new(&ctx);

    let mut report = VerifyReport {
        run_id: rid,
        ..Default::default()
    };

    // Each row is independent; a denied or missing file never stops the loop.
    for (path, kind) in &v.files {
        let row = check_file(v, path, *kind);
        let passed = row.passed();
        slog.scan()
            .path(path.as_str())
            .field("kind", json!(kind.as_str()))
            .field("denied", json!(row.denied))
            .field("exists", json!(row.exists))
            .field("non_empty", json!(row.non_empty))
            .field(
                "content_valid",
                json!(row.content.as_ref().map(|c| c.valid)),
            )
            .emit(if passed {
                Decision::Success
            } else {
                Decision::Failure
            });
        if let Some(stop) = stop_for(&row) {
            v.audit.log(Level::Warn, &stop);
            report.stops.push(stop);
        }
        report.files.push(row);
    }

    // The entry page must reference the other bundle assets. When it cannot
    // be read the checks are skipped with a warning; its absence is already a
    // stop from the scan loop above.
    match checks::fs::read_file(&v.guard, ENTRY_PAGE) {
        Ok(markup) => {
            for asset in REFERENCED_ASSETS {
                let referenced = markup.contains(asset);
                slog.content()
                    .path(ENTRY_PAGE)
                    .field("asset", json!(asset))
                    .field("referenced", json!(referenced))
                    .emit(if referenced {
                        Decision::Success
                    } else {
                        Decision::Failure
                    });
                if !referenced {
                    let stop = format!("{asset} is not referenced in {ENTRY_PAGE}");
                    v.audit.log(Level::Warn, &stop);
                    report.stops.push(stop);
                }
                report.references.push(ReferenceReport {
                    asset: (*asset).to_string(),
                    referenced,
                });
            }
        }
        Err(e) => {
            let warning = format!("reference checks skipped: {e}");
            v.audit.log(Level::Warn, &warning);
            slog.content().path(ENTRY_PAGE).emit_warn();
            report.warnings.push(warning);
        }
    }

    report.ok = report.stops.is_empty();
    slog.summary()
        .field("ok", json!(report.ok))
        .field("stops", json!(report.stops.len()))
        .field("warnings", json!(report.warnings.len()))
        .emit(if report.ok {
            Decision::Success
        } else {
            Decision::Failure
        });
    report
}

/// Check one required file. Checks short-circuit within the row (no content
/// probe for a missing file) but never across rows.
fn check_file<E: FactsEmitter, A: AuditSink>(
    v: &Verifier<E, A>,
    path: &str,
    kind: FileKind,
) -> FileReport {
    if v.guard.validate(path).is_err() {
        return FileReport {
            path: path.to_string(),
            kind,
            denied: true,
            exists: false,
            non_empty: false,
            content: None,
        };
    }
    let exists = checks::fs::file_exists(&v.guard, path);
    let non_empty = exists && checks::fs::file_not_empty(&v.guard, path);
    let content = if non_empty {
        Some(match checks::fs::read_file(&v.guard, path) {
            Ok(text) => checks::content::report_for(kind, &text),
            Err(e) => checks::content::failed(e.to_string()),
        })
    } else {
        None
    };
    FileReport {
        path: path.to_string(),
        kind,
        denied: false,
        exists,
        non_empty,
        content,
    }
}

/// Human message for the first failed check of a row, if any.
fn stop_for(row: &FileReport) -> Option<String> {
    if row.denied {
        Some(format!("{}: access denied", row.path))
    } else if !row.exists {
        Some(format!("{}: file does not exist", row.path))
    } else if !row.non_empty {
        Some(format!("{}: file is empty", row.path))
    } else if let Some(content) = &row.content {
        if content.valid {
            None
        } else if let Some(err) = &content.error {
            Some(format!("{}: {err}", row.path))
        } else {
            Some(format!("{}: {} validation failed", row.path, row.kind))
        }
    } else {
        None
    }
}
