// Audit helpers that emit structured facts across verification stages.
//
// Side-effects:
// - Emits JSON facts via `FactsEmitter` for the `scan`, `content` and
//   `summary` stages of a verification run.
// - Ensures a minimal envelope is present on every fact: `schema_version`,
//   `ts`, `run_id`, `path`.
// - Applies redaction when the run requests deterministic output.
use serde_json::{json, Value};

use crate::constants::SUBSYSTEM;
use crate::logging::{redact_event, FactsEmitter};

pub(crate) const SCHEMA_VERSION: i64 = 1;

/// Emission context shared by all stages of one verification run.
pub(crate) struct AuditCtx<'a> {
    pub facts: &'a dyn FactsEmitter,
    pub run_id: String,
    pub ts: String,
    pub redact: bool,
}

impl<'a> AuditCtx<'a> {
    pub(crate) fn new(facts: &'a dyn FactsEmitter, run_id: String, ts: String, redact: bool) -> Self {
        Self {
            facts,
            run_id,
            ts,
            redact,
        }
    }
}

/// Stage for typed audit emission.
#[derive(Clone, Copy, Debug)]
pub enum Stage {
    Scan,
    Content,
    Summary,
}

impl Stage {
    fn as_event(&self) -> &'static str {
        match self {
            Stage::Scan => "scan",
            Stage::Content => "content",
            Stage::Summary => "summary",
        }
    }
}

/// Decision severity for audit events.
#[derive(Clone, Copy, Debug)]
pub enum Decision {
    Success,
    Failure,
    Warn,
}

impl Decision {
    fn as_str(&self) -> &'static str {
        match self {
            Decision::Success => "success",
            Decision::Failure => "failure",
            Decision::Warn => "warn",
        }
    }
}

/// Builder facade over audit emission with a centralized envelope.
pub struct StageLogger<'a> {
    ctx: &'a AuditCtx<'a>,
}

impl<'a> StageLogger<'a> {
    pub(crate) fn new(ctx: &'a AuditCtx<'a>) -> Self {
        Self { ctx }
    }

    pub fn scan(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::Scan)
    }
    pub fn content(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::Content)
    }
    pub fn summary(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::Summary)
    }
}

pub struct EventBuilder<'a> {
    ctx: &'a AuditCtx<'a>,
    stage: Stage,
    fields: serde_json::Map<String, Value>,
}

impl<'a> EventBuilder<'a> {
    fn new(ctx: &'a AuditCtx<'a>, stage: Stage) -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert("stage".to_string(), json!(stage.as_event()));
        Self { ctx, stage, fields }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.fields.insert("path".into(), json!(path.into()));
        self
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn emit(self, decision: Decision) {
        let mut fields = Value::Object(self.fields);
        if let Some(obj) = fields.as_object_mut() {
            obj.entry("decision").or_insert(json!(decision.as_str()));
            obj.entry("schema_version").or_insert(json!(SCHEMA_VERSION));
            obj.entry("ts").or_insert(json!(self.ctx.ts));
            obj.entry("run_id").or_insert(json!(self.ctx.run_id));
            obj.entry("path").or_insert(json!(""));
        }
        let out = if self.ctx.redact {
            redact_event(fields)
        } else {
            fields
        };
        self.ctx
            .facts
            .emit(SUBSYSTEM, self.stage.as_event(), decision.as_str(), out);
    }

    pub fn emit_success(self) {
        self.emit(Decision::Success)
    }
    pub fn emit_failure(self) {
        self.emit(Decision::Failure)
    }
    pub fn emit_warn(self) {
        self.emit(Decision::Warn)
    }
}
