//! Shared user-facing error messages used across the core and host layers.

/// Message for a character code that does not fit in a code unit.
pub const CODE_OUT_OF_RANGE_MSG: &str = "value out of range";

/// Message for a repetition whose result cannot be allocated.
pub const RESULT_TOO_LARGE_MSG: &str = "resulting string too large";

/// Message for the method-call surface when string methods are disabled.
pub const NO_STRING_METHODS_MSG: &str = "string methods are disabled";
