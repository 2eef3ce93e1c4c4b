use std::fmt;

use serde::Serialize;

/// Content family of a required bundle file; selects which presence probes run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Html,
    Script,
    Stylesheet,
}

impl FileKind {
    /// Stable identifier used in run-ID derivation and fact fields.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Html => "html",
            FileKind::Script => "script",
            FileKind::Stylesheet => "stylesheet",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileKind::Html => "HTML",
            FileKind::Script => "JavaScript",
            FileKind::Stylesheet => "CSS",
        };
        write!(f, "{name}")
    }
}

/// Outcome of a single content presence probe (e.g. `has_doctype`).
#[derive(Clone, Debug, Serialize)]
pub struct ContentProbe {
    pub name: &'static str,
    pub ok: bool,
}

/// Outcome of a format-specific content validation.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ContentReport {
    pub valid: bool,
    pub probes: Vec<ContentProbe>,
    /// Read failure captured in-report; the run itself never aborts on it.
    pub error: Option<String>,
}

/// Per-file verification row.
#[derive(Clone, Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    pub kind: FileKind,
    /// The path failed containment validation; all other flags are false.
    pub denied: bool,
    pub exists: bool,
    pub non_empty: bool,
    pub content: Option<ContentReport>,
}

impl FileReport {
    /// True when every check that ran on this row passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        !self.denied
            && self.exists
            && self.non_empty
            && self.content.as_ref().map_or(true, |c| c.valid)
    }
}

/// One entry-page asset reference check.
#[derive(Clone, Debug, Serialize)]
pub struct ReferenceReport {
    pub asset: String,
    pub referenced: bool,
}

/// Aggregate verification outcome.
#[derive(Clone, Debug, Default, Serialize)]
pub struct VerifyReport {
    pub ok: bool,
    pub run_id: String,
    pub files: Vec<FileReport>,
    pub references: Vec<ReferenceReport>,
    pub warnings: Vec<String>,
    pub stops: Vec<String>,
}
