//! Layering guardrails for the workspace crates.
//!
//! `lunar_core` is the pure semantic layer and must stay dependency-free. `lunar_stdlib` may depend on `lunar_core`
//! and the error/logging facades, but never on CLI-only crates.

/// Collect the crate names listed in the `[dependencies]` table of a manifest.
fn dependency_names(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            if line == "[dependencies]" {
                in_dependencies = true;
                continue;
            }
            // Any new section after `[dependencies]` ends the scan window.
            if in_dependencies {
                break;
            }
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_has_no_dependencies() {
    let manifest = include_str!("../crates/lunar_core/Cargo.toml");
    let deps = dependency_names(manifest);
    assert!(deps.is_empty(), "`lunar_core` must not have dependencies, found {deps:?}");
}

#[test]
fn stdlib_does_not_depend_on_cli_crates() {
    let manifest = include_str!("../crates/lunar_stdlib/Cargo.toml");
    let deps = dependency_names(manifest);
    assert!(deps.contains(&"lunar_core".to_string()));
    for forbidden in ["clap", "serde_json", "tracing-subscriber"] {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "`{forbidden}` belongs to the CLI crate, not `lunar_stdlib`"
        );
    }
}
