//! lunar version information.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The lunar version string (for example, `0.1.0-alpha.4`).
pub const LUNAR_VERSION: &str = env!("CARGO_PKG_VERSION");
