//! Library configuration.

use lunar_core::strings::BYTE_PLACEHOLDER;

/// Host-level settings for a [`crate::StringLib`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLibConfig {
    /// Character reported by `byte` for units that do not fit in a byte
    pub byte_placeholder: char,
    /// Whether strings accept method calls (`s:sub(2)`)
    pub string_methods: bool,
}

impl Default for StringLibConfig {
    fn default() -> Self {
        Self {
            byte_placeholder: '?',
            string_methods: true,
        }
    }
}

impl StringLibConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `byte` placeholder character
    pub fn with_byte_placeholder(mut self, placeholder: char) -> Self {
        self.byte_placeholder = placeholder;
        self
    }

    /// Enable or disable the method-call surface
    pub fn with_string_methods(mut self, enabled: bool) -> Self {
        self.string_methods = enabled;
        self
    }

    /// The placeholder as a single code unit.
    ///
    /// Characters outside the Basic Multilingual Plane need two units and fall back to `?`.
    pub fn placeholder_unit(&self) -> u16 {
        u16::try_from(u32::from(self.byte_placeholder)).unwrap_or(BYTE_PLACEHOLDER)
    }
}
