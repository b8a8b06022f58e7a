//! Define the immutable code-unit sequence every string primitive operates on.
//!
//! ## Notes
//! - **Granularity**: a `LuaString` is a run of UTF-16 code units. Lengths, positions, `byte`, `unicode` and
//!   `reverse` all count code units, not Unicode scalars. Characters outside the Basic Multilingual Plane occupy two
//!   units and can be split by positional operations.
//! - Values are never mutated after construction; every operation builds a new `LuaString`.

use std::fmt;

/// An immutable sequence of UTF-16 code units.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LuaString {
    units: Vec<u16>,
}

impl LuaString {
    /// Create an empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap raw code units without validation.
    ///
    /// ## Notes
    /// - Unpaired surrogates are allowed; they display as U+FFFD.
    pub fn from_units(units: Vec<u16>) -> Self {
        Self { units }
    }

    /// Borrow the underlying code units.
    pub fn units(&self) -> &[u16] {
        &self.units
    }

    /// Return the number of code units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Copy a zero-based, half-open range of units into a new string.
    ///
    /// ## Returns
    /// - (`LuaString`): the copied units; empty if the range falls outside the string.
    pub fn slice(&self, range: std::ops::Range<usize>) -> LuaString {
        match self.units.get(range) {
            Some(units) => Self::from_units(units.to_vec()),
            None => Self::new(),
        }
    }

    /// Decode to a Rust `String`, replacing unpaired surrogates with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }

    /// Decode to a Rust `String` if the units form valid UTF-16.
    pub fn to_string_strict(&self) -> Option<String> {
        String::from_utf16(&self.units).ok()
    }
}

impl From<&str> for LuaString {
    fn from(s: &str) -> Self {
        Self::from_units(s.encode_utf16().collect())
    }
}

impl From<String> for LuaString {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&String> for LuaString {
    fn from(s: &String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Vec<u16>> for LuaString {
    fn from(units: Vec<u16>) -> Self {
        Self::from_units(units)
    }
}

impl PartialEq<str> for LuaString {
    fn eq(&self, other: &str) -> bool {
        self.units.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for LuaString {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl fmt::Display for LuaString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for LuaString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string_lossy())
    }
}
