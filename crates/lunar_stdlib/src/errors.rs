//! Error taxonomy for library calls.
//!
//! Only marshalling failures are errors. Positions that fall outside a string are absorbed into empty results by the
//! core and never reach this module.

use std::fmt;

use lunar_core::errors::{CODE_OUT_OF_RANGE_MSG, NO_STRING_METHODS_MSG, RESULT_TOO_LARGE_MSG};
use lunar_core::lang::registry::ParamType;
use thiserror::Error;

use crate::value::DataType;

/// What was found where a typed argument was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    /// The argument was not supplied. A supplied nil reports as `Type(DataType::Nil)`.
    NoValue,
    /// The argument was supplied with the wrong type.
    Type(DataType),
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::NoValue => f.write_str("no value"),
            Found::Type(ty) => write!(f, "{ty}"),
        }
    }
}

/// Errors raised by pattern engines. The library forwards them unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("invalid use of '%' in replacement string")]
    InvalidReplacement,

    #[error("string/number expected as replacement, got {0}")]
    BadReplacement(DataType),

    #[error("malformed pattern ({0})")]
    Malformed(String),
}

/// Errors from a library call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallError {
    /// A required argument is absent, or an argument has the wrong type.
    ///
    /// `position` is 1-based, as scripts count arguments.
    #[error("bad argument #{position} to '{function}' ({expected} expected, got {found})")]
    ArgumentType {
        function: &'static str,
        position: usize,
        expected: ParamType,
        found: Found,
    },

    /// A numeric argument cannot be represented (e.g. a character code beyond a code unit).
    #[error("bad argument #{position} to '{function}' ({})", CODE_OUT_OF_RANGE_MSG)]
    ValueOutOfRange { function: &'static str, position: usize },

    /// A repetition would produce a string too large to allocate.
    #[error("{}", RESULT_TOO_LARGE_MSG)]
    ResultTooLarge { function: &'static str },

    #[error("attempt to call a nil value (field '{0}')")]
    UnknownFunction(String),

    #[error("{}", NO_STRING_METHODS_MSG)]
    NoMethods,

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

impl CallError {
    /// Return the name of the function the error is attributed to, if any.
    pub fn function(&self) -> Option<&str> {
        match self {
            CallError::ArgumentType { function, .. }
            | CallError::ValueOutOfRange { function, .. }
            | CallError::ResultTooLarge { function } => Some(*function),
            CallError::UnknownFunction(name) => Some(name.as_str()),
            CallError::NoMethods | CallError::Pattern(_) => None,
        }
    }
}

/// Result type for library calls.
pub type CallResult<T> = Result<T, CallError>;
