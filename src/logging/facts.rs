use log::Level;
use serde_json::Value;

/// Structured fact stream: one JSON event per check decision.
pub trait FactsEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value);
}

/// Human-oriented audit line sink.
pub trait AuditSink {
    fn log(&self, level: Level, msg: &str);
}

/// Default sink that forwards facts as JSON lines through the `log` facade.
#[derive(Default)]
pub struct JsonlSink;

impl FactsEmitter for JsonlSink {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        log::info!(
            target: "launchcheck::facts",
            "{}",
            serde_json::json!({
                "subsystem": subsystem,
                "event": event,
                "decision": decision,
                "fields": fields,
            })
        );
    }
}

impl AuditSink for JsonlSink {
    fn log(&self, level: Level, msg: &str) {
        log::log!(level, "{msg}");
    }
}
