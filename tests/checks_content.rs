//! Content validators: presence probes per file kind.

mod common;

use launchcheck::checks::content::{html_report, report_for, script_report, stylesheet_report};
use launchcheck::types::report::FileKind;

fn probe_ok(report: &launchcheck::types::report::ContentReport, name: &str) -> bool {
    report
        .probes
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.ok)
        .unwrap_or(false)
}

#[test]
fn fixture_html_passes_all_probes() {
    let report = html_report(common::FIXTURE_HTML);
    assert!(report.valid);
    assert_eq!(report.probes.len(), 5);
    assert!(report.probes.iter().all(|p| p.ok));
}

#[test]
fn html_without_title_fails_only_the_title_probe() {
    let markup = "<!DOCTYPE html><html><head></head><body></body></html>";
    let report = html_report(markup);
    assert!(!report.valid);
    assert!(probe_ok(&report, "has_doctype"));
    assert!(probe_ok(&report, "has_body_tag"));
    assert!(!probe_ok(&report, "has_title"));
}

#[test]
fn doctype_match_is_case_insensitive() {
    let markup = "<!doctype html><html><head><title>x</title></head><body></body></html>";
    let report = html_report(markup);
    assert!(probe_ok(&report, "has_doctype"));
}

#[test]
fn fixture_script_passes() {
    let report = script_report(common::FIXTURE_JS);
    assert!(report.valid);
}

#[test]
fn script_without_dom_ready_hook_fails() {
    let report = script_report("window.addEventListener('click', run);");
    assert!(!report.valid);
    assert!(probe_ok(&report, "has_event_listener"));
    assert!(!probe_ok(&report, "has_dom_content_loaded"));
}

#[test]
fn fixture_stylesheet_passes() {
    let report = stylesheet_report(common::FIXTURE_CSS);
    assert!(report.valid);
}

#[test]
fn stylesheet_without_color_declaration_fails() {
    let report = stylesheet_report("div { margin: 0; }");
    assert!(!report.valid);
    assert!(probe_ok(&report, "has_css_rules"));
    assert!(!probe_ok(&report, "has_color_definitions"));
}

#[test]
fn stylesheet_without_rules_fails() {
    let report = stylesheet_report("/* just a comment */");
    assert!(!report.valid);
}

#[test]
fn report_for_dispatches_on_kind() {
    let html = report_for(FileKind::Html, common::FIXTURE_HTML);
    let script = report_for(FileKind::Script, common::FIXTURE_JS);
    let css = report_for(FileKind::Stylesheet, common::FIXTURE_CSS);
    assert!(html.valid && script.valid && css.valid);
    assert_eq!(html.probes.len(), 5);
    assert_eq!(script.probes.len(), 2);
    assert_eq!(css.probes.len(), 2);
}
