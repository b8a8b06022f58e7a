//! String library vocabulary registries.
//!
//! Callers work with **stable IDs** (e.g. `StringFnId`) and look up spellings, signatures and metadata via registry
//! tables instead of matching on raw names.
//!
//! ## Examples
//! ```rust
//! use lunar_core::lang::functions::{self, StringFnId};
//!
//! assert_eq!(functions::from_str("rep"), Some(StringFnId::Rep));
//! assert_eq!(functions::from_str("Rep"), None);
//! ```
//!
//! ## See also
//! - `cargo run -p lunar_core --bin generate_lib_reference` to generate the Markdown reference table.

pub mod functions;
pub mod registry;
