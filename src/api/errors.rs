use crate::types::report::VerifyReport;

// Stable identifiers for summary classification.
// We intentionally keep SCREAMING_SNAKE_CASE to match emitted IDs.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorId {
    E_ACCESS,
    E_MISSING,
    E_EMPTY,
    E_CONTENT,
    E_REFERENCE,
    E_GENERIC,
}

#[must_use]
pub const fn id_str(id: ErrorId) -> &'static str {
    match id {
        ErrorId::E_ACCESS => "E_ACCESS",
        ErrorId::E_MISSING => "E_MISSING",
        ErrorId::E_EMPTY => "E_EMPTY",
        ErrorId::E_CONTENT => "E_CONTENT",
        ErrorId::E_REFERENCE => "E_REFERENCE",
        ErrorId::E_GENERIC => "E_GENERIC",
    }
}

#[must_use]
pub const fn exit_code_for(id: ErrorId) -> i32 {
    match id {
        ErrorId::E_ACCESS => 10,
        ErrorId::E_MISSING => 20,
        ErrorId::E_EMPTY => 30,
        ErrorId::E_CONTENT => 40,
        ErrorId::E_REFERENCE => 50,
        ErrorId::E_GENERIC => 1,
    }
}

/// Classify a finished report into a chain of stable summary error IDs, in
/// row order, deduplicated. Classification branches on the typed report rows,
/// never on message text. Returns an empty chain for a passing report.
#[must_use]
pub fn infer_summary_error_ids(report: &VerifyReport) -> Vec<ErrorId> {
    let mut out: Vec<ErrorId> = Vec::new();
    for f in &report.files {
        if f.denied {
            out.push(ErrorId::E_ACCESS);
        } else if !f.exists {
            out.push(ErrorId::E_MISSING);
        } else if !f.non_empty {
            out.push(ErrorId::E_EMPTY);
        } else if f.content.as_ref().map_or(false, |c| !c.valid) {
            out.push(ErrorId::E_CONTENT);
        }
    }
    if report.references.iter().any(|r| !r.referenced) {
        out.push(ErrorId::E_REFERENCE);
    }
    if out.is_empty() && !report.ok {
        out.push(ErrorId::E_GENERIC);
    }
    // Deduplicate while preserving order
    let mut seen = std::collections::HashSet::new();
    out.into_iter().filter(|id| seen.insert(*id)).collect()
}

/// Process exit code for a finished report: 0 on success, otherwise the code
/// of the first inferred error ID.
#[must_use]
pub fn exit_code(report: &VerifyReport) -> i32 {
    if report.ok {
        return 0;
    }
    infer_summary_error_ids(report)
        .first()
        .copied()
        .map_or(exit_code_for(ErrorId::E_GENERIC), exit_code_for)
}
