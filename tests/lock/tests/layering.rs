//! Build-graph isolation: `ferry_kernel` and `ferry_search` are independent
//! leaves; only `ferry_harness` joins them.
//!
//! Checked at the source and manifest level so a stray `use` fails here
//! before it becomes a cycle.

use std::fmt::Write;
use std::fs;
use std::path::Path;

fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

/// Collect `(file, line, text)` for non-comment lines containing a pattern.
fn scan(dir: &Path, patterns: &[&str], violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan(&path, patterns, violations);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            for (line_no, line) in content.lines().enumerate() {
                let trimmed = line.trim();
                if trimmed.starts_with("//") {
                    continue;
                }
                if patterns.iter().any(|p| trimmed.contains(p)) {
                    violations.push((path.display().to_string(), line_no + 1, line.to_string()));
                }
            }
        }
    }
}

fn assert_source_clean(crate_dir: &str, patterns: &[&str]) {
    let mut violations = Vec::new();
    scan(&workspace_root().join(crate_dir).join("src"), patterns, &mut violations);
    if !violations.is_empty() {
        let mut msg = format!("{crate_dir}/src references a higher layer:\n");
        for (file, line, content) in &violations {
            let _ = writeln!(msg, "  {file}:{line}: {content}");
        }
        panic!("{msg}");
    }
}

fn assert_manifest_clean(crate_dir: &str, forbidden: &[&str]) {
    let path = workspace_root().join(crate_dir).join("Cargo.toml");
    let content = fs::read_to_string(&path).expect("Cargo.toml must exist");
    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            continue;
        }
        for name in forbidden {
            assert!(
                !trimmed.starts_with(name),
                "{crate_dir}/Cargo.toml line {}: depends on {name}",
                line_no + 1
            );
        }
    }
}

#[test]
fn kernel_source_has_no_upward_references() {
    assert_source_clean("kernel", &["ferry_search", "ferry_harness"]);
}

#[test]
fn search_source_is_domain_agnostic() {
    assert_source_clean("search", &["ferry_kernel", "ferry_harness"]);
}

#[test]
fn kernel_manifest_has_no_upward_dependencies() {
    assert_manifest_clean("kernel", &["ferry-search", "ferry-harness"]);
}

#[test]
fn search_manifest_has_no_workspace_dependencies() {
    assert_manifest_clean("search", &["ferry-kernel", "ferry-harness"]);
}
