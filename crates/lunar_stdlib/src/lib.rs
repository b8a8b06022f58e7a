//! Host layer for the lunar `string` library.
//!
//! This crate binds the pure primitives of [`lunar_core`] to a dynamic value model: scripts call functions by name with
//! a list of [`Value`]s, and [`StringLib`] validates the arguments against the registry, fills in defaults, and either
//! runs a primitive or forwards to the configured [`PatternEngine`].

#![deny(clippy::unwrap_used)]

pub mod args;
pub mod config;
pub mod errors;
pub mod module;
pub mod pattern;
pub mod value;

// Re-export commonly used items
pub use config::StringLibConfig;
pub use errors::{CallError, CallResult, PatternError};
pub use module::StringLib;
pub use pattern::{LiteralEngine, PatternEngine};
pub use value::{DataType, MatchIter, Value};
