//! Format-specific content validation.
//!
//! Each validator is a set of case-insensitive presence probes over the file
//! text; a file is valid when every probe of its kind matches. The probes
//! mirror what the launch of the bundle actually depends on (markup skeleton,
//! a DOM-ready script hook, at least one styled rule).

use regex::RegexBuilder;

use crate::types::report::{ContentProbe, ContentReport, FileKind};

/// Case-insensitive presence probe. An unbuildable pattern degrades to a miss
/// rather than a panic.
fn probe(name: &'static str, pattern: &str, content: &str) -> ContentProbe {
    let ok = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map(|re| re.is_match(content))
        .unwrap_or(false);
    ContentProbe { name, ok }
}

fn collect(probes: Vec<ContentProbe>) -> ContentReport {
    let valid = probes.iter().all(|p| p.ok);
    ContentReport {
        valid,
        probes,
        error: None,
    }
}

/// HTML markup probes: doctype, html/head/body tags and a non-empty title.
pub fn html_report(content: &str) -> ContentReport {
    collect(vec![
        probe("has_doctype", r"<!DOCTYPE html>", content),
        probe("has_html_tag", r"<html[^>]*>", content),
        probe("has_head_tag", r"<head[^>]*>", content),
        probe("has_body_tag", r"<body[^>]*>", content),
        probe("has_title", r"<title[^>]*>.*</title>", content),
    ])
}

/// Script probes: the bundle wires itself up on `DOMContentLoaded`.
pub fn script_report(content: &str) -> ContentReport {
    collect(vec![
        probe("has_event_listener", r"addEventListener", content),
        probe("has_dom_content_loaded", r"DOMContentLoaded", content),
    ])
}

/// Stylesheet probes: at least one rule block and a color declaration.
pub fn stylesheet_report(content: &str) -> ContentReport {
    collect(vec![
        probe("has_css_rules", r"[^}]*\{[^}]*\}", content),
        probe("has_color_definitions", r"(color|background):", content),
    ])
}

/// Dispatch on the file kind declared in the required-file table.
pub fn report_for(kind: FileKind, content: &str) -> ContentReport {
    match kind {
        FileKind::Html => html_report(content),
        FileKind::Script => script_report(content),
        FileKind::Stylesheet => stylesheet_report(content),
    }
}

/// Record a read failure in-report, per the best-effort probe policy.
pub fn failed(err: impl Into<String>) -> ContentReport {
    ContentReport {
        valid: false,
        probes: Vec::new(),
        error: Some(err.into()),
    }
}
