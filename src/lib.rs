#![forbid(unsafe_code)]
//! lunar: a Lua-compatible `string` library
//!
//! The library itself lives in two crates:
//!
//! - [`lunar_core`]: index normalization and pure string primitives.
//! - [`lunar_stdlib`]: the value model, argument checking and the `string` dispatch table.
//!
//! This crate provides the `lunar` command-line tool on top of them.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module and
//!   `lunar_stdlib` enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a programming error, use `.expect("INVARIANT: reason")` with a
//!   clear explanation.

pub mod cli;
pub mod version;

pub use lunar_stdlib::{CallError, StringLib, StringLibConfig, Value};
