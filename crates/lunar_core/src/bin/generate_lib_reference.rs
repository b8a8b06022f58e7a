//! Generate Markdown reference docs from the `lunar_core::lang` registry.
//!
//! Renders [`STRING_FUNCTIONS`] into `docs/reference/string.md`.
//!
//! ## Notes
//! - The generated file is a derived artifact; update the registry instead of editing it.
//!
//! ## Examples
//! Run from the workspace root:
//! ```bash
//! cargo run -p lunar_core --bin generate_lib_reference
//! ```
//!
//! ## Panics
//! - If the workspace root cannot be resolved.
//! - If the output file cannot be written.

use std::fs;
use std::path::{Path, PathBuf};

use lunar_core::lang::functions::STRING_FUNCTIONS;

fn main() {
    let root = workspace_root();

    let out_dir = root.join("docs/reference");
    fs::create_dir_all(&out_dir).expect("create docs/reference/");

    write_string_reference(&out_dir.join("string.md"));
}

fn write_string_reference(path: &Path) {
    let mut out = String::new();
    out.push_str("# `string` library reference\n\n");
    out.push_str("> Generated file. Regenerate with `cargo run -p lunar_core --bin generate_lib_reference`.\n\n");

    out.push_str("| Function | Signature | Origin | Description |\n");
    out.push_str("|---|---|---|---|\n");
    for f in STRING_FUNCTIONS {
        out.push_str(&format!(
            "| `{}` | `{}` | {:?} | {} |\n",
            f.canonical,
            f.signature(),
            f.origin,
            f.description
        ));
    }
    out.push('\n');

    out.push_str("## Examples\n\n");
    for f in STRING_FUNCTIONS {
        if f.examples.is_empty() {
            continue;
        }
        out.push_str(&format!("### `{}`\n\n", f.canonical));
        for ex in f.examples {
            out.push_str("```lua\n");
            out.push_str(ex.code);
            out.push_str(&format!("  --> {}\n", ex.result));
            out.push_str("```\n\n");
        }
    }

    while out.ends_with("\n\n") {
        out.pop();
    }
    fs::write(path, out).expect("write string.md");
}

fn workspace_root() -> PathBuf {
    // crates/lunar_core -> crates -> workspace root
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .expect("workspace root (two levels above crates/lunar_core)")
}
