//! Shared test helpers for the launchcheck integration tests.
#![allow(dead_code)]

use log::Level;
use serde_json::Value;
use std::sync::{Arc, Mutex};

use launchcheck::logging::{AuditSink, FactsEmitter};

/// A simple in-memory emitter to capture facts during tests.
#[derive(Clone, Default, Debug)]
pub struct TestEmitter {
    pub events: Arc<Mutex<Vec<(String, String, String, Value)>>>,
}

impl FactsEmitter for TestEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        self.events
            .lock()
            .unwrap()
            .push((subsystem.into(), event.into(), decision.into(), fields));
    }
}

/// A no-op audit sink for tests.
#[derive(Clone, Default)]
pub struct TestAudit;

impl AuditSink for TestAudit {
    fn log(&self, _level: Level, _msg: &str) {}
}

pub const FIXTURE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>Content Studio</title>
    <link rel="stylesheet" href="styles.css">
</head>
<body>
    <script src="script.js"></script>
</body>
</html>
"#;

pub const FIXTURE_JS: &str =
    "document.addEventListener('DOMContentLoaded', () => { console.log('ready'); });\n";

pub const FIXTURE_CSS: &str = "body { color: #333; background: #fff; }\n";

/// Create an empty temporary directory suitable for building PathGuards.
pub fn with_temp_root() -> tempfile::TempDir {
    tempfile::tempdir().expect("tempdir")
}

/// Create a temporary bundle directory populated with a valid required-file set.
pub fn with_app_fixture() -> tempfile::TempDir {
    let dir = with_temp_root();
    std::fs::write(dir.path().join("index.html"), FIXTURE_HTML).expect("write index.html");
    std::fs::write(dir.path().join("script.js"), FIXTURE_JS).expect("write script.js");
    std::fs::write(dir.path().join("styles.css"), FIXTURE_CSS).expect("write styles.css");
    dir
}
