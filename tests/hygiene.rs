//! Hygiene — enforces coding standards at test time
//!
//! Scans the crate's production sources for antipatterns that violate
//! project standards. Each pattern has a budget (all currently zero). If you
//! must add one, fix an existing one first — a budget never grows.

use std::fs;
use std::path::Path;

/// (needle, budget, failure hint)
const BUDGETS: &[(&str, usize, &str)] = &[
    // Panics — these crash the host process mid-stroke.
    (".unwrap()", 0, "propagate or handle the error"),
    (".expect(", 0, "propagate or handle the error"),
    ("panic!(", 0, "return an error instead"),
    ("unreachable!(", 0, "restructure so the state is unrepresentable"),
    ("todo!(", 0, "implement before merging"),
    ("unimplemented!(", 0, "implement before merging"),
    // Silent loss — discards results without inspecting.
    ("let _ =", 0, "bind and handle the value"),
    (".ok()", 0, "inspect the error"),
    // Structure.
    ("#[allow(dead_code)]", 0, "delete the dead code"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files under `src/`, excluding sibling test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits_for(files: &[SourceFile], needle: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(needle))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn source_budgets_hold() {
    let files = source_files();
    assert!(!files.is_empty(), "no production sources found under src/");

    let mut failures = Vec::new();
    for &(needle, budget, hint) in BUDGETS {
        let hits = hits_for(&files, needle);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > budget {
            let detail = hits
                .iter()
                .map(|(path, count)| format!("    {path}: {count}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "  `{needle}` budget exceeded: found {count}, max {budget} ({hint})\n{detail}"
            ));
        }
    }

    assert!(failures.is_empty(), "hygiene violations:\n{}", failures.join("\n"));
}
