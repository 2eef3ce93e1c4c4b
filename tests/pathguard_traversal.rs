//! PathGuard containment rejections for traversal and escape input.

mod common;

use launchcheck::types::errors::ErrorKind;
use launchcheck::types::pathguard::PathGuard;

#[test]
fn rejects_leading_dotdot() {
    let root = common::with_temp_root();
    let guard = PathGuard::new(root.path()).expect("guard");
    let err = guard.validate("../etc/passwd").unwrap_err();
    assert_eq!(err.kind, ErrorKind::AccessDenied);
}

#[test]
fn rejects_multiple_parent_segments() {
    let root = common::with_temp_root();
    let guard = PathGuard::new(root.path()).expect("guard");
    let err = guard.validate("../../sensitive").unwrap_err();
    assert_eq!(err.kind, ErrorKind::AccessDenied);
}

#[test]
fn rejects_traversal_below_a_subdirectory() {
    let root = common::with_temp_root();
    let guard = PathGuard::new(root.path()).expect("guard");
    let err = guard.validate("subdir/../../etc/passwd").unwrap_err();
    assert_eq!(err.kind, ErrorKind::AccessDenied);
}

#[test]
fn rejects_absolute_candidate_outside_base() {
    let root = common::with_temp_root();
    let guard = PathGuard::new(root.path()).expect("guard");
    let err = guard.validate("/etc/passwd").unwrap_err();
    assert_eq!(err.kind, ErrorKind::AccessDenied);
}

#[test]
fn percent_encoded_traversal_stays_literal() {
    let root = common::with_temp_root();
    let guard = PathGuard::new(root.path()).expect("guard");
    // Not decoded; a single literal component that stays inside the base.
    let p = guard
        .validate("%2e%2e%2f%2e%2e%2fetc%2fpasswd")
        .expect("literal component");
    assert!(p.starts_with(guard.base()));
    assert!(!p.ends_with("etc/passwd"));
}

#[test]
fn foreign_drive_syntax_is_a_literal_component_on_unix() {
    #[cfg(unix)]
    {
        let root = common::with_temp_root();
        let guard = PathGuard::new(root.path()).expect("guard");
        let p = guard.validate("C:\\Windows\\System32").expect("literal");
        assert!(p.starts_with(guard.base()));
    }
}

#[test]
fn denial_is_idempotent() {
    let root = common::with_temp_root();
    let guard = PathGuard::new(root.path()).expect("guard");
    let first = guard.validate("../escape").unwrap_err();
    let second = guard.validate("../escape").unwrap_err();
    assert_eq!(first.kind, second.kind);
}

#[test]
fn every_candidate_is_contained_or_denied() {
    let root = common::with_temp_root();
    let guard = PathGuard::new(root.path()).expect("guard");
    let candidates = [
        "",
        ".",
        "index.html",
        "./script.js",
        "a/b/c",
        "a/../b",
        "..",
        "../x",
        "x/../../y",
        "/etc/passwd",
        "%2e%2e%2fsecret",
        "..\\windows",
    ];
    for candidate in candidates {
        match guard.validate(candidate) {
            Ok(p) => assert!(
                p.starts_with(guard.base()),
                "accepted path escaped base: {candidate} -> {}",
                p.display()
            ),
            Err(e) => assert_eq!(e.kind, ErrorKind::AccessDenied, "candidate: {candidate}"),
        }
    }
}
