//! Provide the pure semantic core of the lunar string library.
//!
//! This crate is intentionally small and dependency-free. It contains deterministic helpers that hosts call to get
//! Lua-style string behavior:
//! - [`range`]: turn 1-based, negative-aware, possibly out-of-bounds positions into clamped ranges;
//! - [`strings`]: the primitives built on those ranges (`sub`, `byte`, `unicode`, `char`, `rep`, ...);
//! - [`lang`]: the function vocabulary (names, parameter signatures) hosts dispatch on.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state, and no host-specific types.
//! - Out-of-range positions never fail. They are absorbed into empty results.
//!
//! ## Examples
//! ```rust
//! use lunar_core::lua_string::LuaString;
//! use lunar_core::strings::{str_rep, str_sub};
//!
//! let s = LuaString::from("hello");
//! assert_eq!(str_sub(&s, Some(-3), Some(-1)), "llo");
//! assert_eq!(str_rep(&LuaString::from("ab"), 3).unwrap(), "ababab");
//! ```

pub mod errors;
pub mod lang;
pub mod lua_string;
pub mod range;
pub mod strings;

pub use lua_string::LuaString;
pub use range::{StrRange, adjust_index};
