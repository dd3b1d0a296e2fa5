//! Hygiene — enforces coding standards at test time.
//!
//! Scans the production source tree for antipatterns. Every budget is zero;
//! in-session operations are total functions, so nothing in `src/` should
//! panic or silently discard an error.

use std::fs;
use std::path::Path;

/// (pattern, budget, what it means)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics the process"),
    (".expect(", 0, "panics the process"),
    ("panic!(", 0, "panics the process"),
    ("unreachable!(", 0, "panics the process"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "discards an error without inspecting"),
    (".ok()", 0, "discards an error without inspecting"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

/// Collect production `.rs` files from `src/`, skipping `*_test.rs`.
fn source_files(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            source_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let name = path.to_string_lossy().to_string();
            if name.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((name, content));
            }
        }
    }
}

#[test]
fn source_stays_within_budgets() {
    let mut files = Vec::new();
    source_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no source files found; wrong working dir?");

    let mut violations = Vec::new();
    for (pattern, budget, why) in BUDGETS {
        let hits: Vec<String> = files
            .iter()
            .flat_map(|(name, content)| {
                content
                    .lines()
                    .enumerate()
                    .filter(|(_, line)| line.contains(pattern))
                    .map(|(i, _)| format!("  {name}:{}: {pattern}", i + 1))
                    .collect::<Vec<_>>()
            })
            .collect();
        if hits.len() > *budget {
            violations.push(format!(
                "`{pattern}` ({why}): found {}, max {budget}\n{}",
                hits.len(),
                hits.join("\n")
            ));
        }
    }

    assert!(
        violations.is_empty(),
        "hygiene budget exceeded:\n{}",
        violations.join("\n")
    );
}
