//! Hygiene — enforces coding standards at test time.
//!
//! Scans `theme/src` for antipatterns. Every budget is zero and stays zero:
//! this crate is the browser-independent core, so nothing in it may panic or
//! silently discard a result.

use std::fs;
use std::path::Path;

/// (needle, what it means). A production line containing a needle fails the
/// matching budget test.
const BUDGETS: &[(&str, &str)] = &[
    (".unwrap()", "panicking unwrap"),
    (".expect(", "panicking expect"),
    ("panic!(", "explicit panic"),
    ("unreachable!(", "unreachable assertion"),
    ("todo!(", "unfinished stub"),
    ("unimplemented!(", "unfinished stub"),
    ("let _ =", "silently discarded result"),
    (".ok()", "silently discarded error"),
    ("#[allow(dead_code)]", "suppressed dead-code lint"),
];

fn production_sources() -> Vec<(String, String)> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found under theme/src");
    files
}

fn collect(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        // Sibling *_test.rs files are exempt; tests may unwrap.
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn production_sources_carry_no_antipatterns() {
    let files = production_sources();
    let mut violations = Vec::new();
    for (needle, label) in BUDGETS {
        for (path, content) in &files {
            for (lineno, line) in content.lines().enumerate() {
                if line.contains(needle) {
                    violations.push(format!("  {path}:{}: {label} ({needle})", lineno + 1));
                }
            }
        }
    }
    assert!(
        violations.is_empty(),
        "hygiene violations in theme/src:\n{}",
        violations.join("\n")
    );
}
