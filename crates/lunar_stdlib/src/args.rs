//! Argument marshalling for library calls.
//!
//! [`CallArgs`] is a read-only view over the values a script passed, tagged with the called function's name so every
//! failure can be attributed. Accessors take **zero-based** indices; errors report **1-based** positions.

use lunar_core::LuaString;
use lunar_core::lang::registry::{Param, ParamType};

use crate::errors::{CallError, CallResult, Found};
use crate::value::{DataType, Value};

/// A view over the arguments of one call.
#[derive(Debug, Clone, Copy)]
pub struct CallArgs<'a> {
    function: &'static str,
    values: &'a [Value],
}

impl<'a> CallArgs<'a> {
    pub fn new(function: &'static str, values: &'a [Value]) -> Self {
        Self { function, values }
    }

    pub fn function(&self) -> &'static str {
        self.function
    }

    /// Number of supplied arguments (trailing nils included).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Return argument `idx`, or `None` when it was not supplied.
    ///
    /// ## Notes
    /// - A supplied `nil` is returned as `Some(&Value::Nil)`; optional accessors treat both the same way.
    pub fn get(&self, idx: usize) -> Option<&'a Value> {
        self.values.get(idx)
    }

    /// Return argument `idx` of any type, failing only when absent.
    pub fn any(&self, idx: usize) -> CallResult<&'a Value> {
        self.get(idx).ok_or_else(|| self.type_error(idx, ParamType::Any, Found::NoValue))
    }

    /// Return a required string argument.
    pub fn string(&self, idx: usize) -> CallResult<&'a LuaString> {
        match self.get(idx) {
            Some(Value::String(s)) => Ok(s),
            other => Err(self.mismatch(idx, ParamType::String, other)),
        }
    }

    /// Return an optional string argument (`None` when absent or nil).
    pub fn opt_string(&self, idx: usize) -> CallResult<Option<&'a LuaString>> {
        match self.get(idx) {
            None | Some(Value::Nil) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            other => Err(self.mismatch(idx, ParamType::String, other)),
        }
    }

    /// Return a required number argument.
    pub fn number(&self, idx: usize) -> CallResult<f64> {
        match self.get(idx) {
            Some(Value::Number(n)) => Ok(*n),
            other => Err(self.mismatch(idx, ParamType::Number, other)),
        }
    }

    /// Return an optional number argument (`None` when absent or nil).
    pub fn opt_number(&self, idx: usize) -> CallResult<Option<f64>> {
        match self.get(idx) {
            None | Some(Value::Nil) => Ok(None),
            Some(Value::Number(n)) => Ok(Some(*n)),
            other => Err(self.mismatch(idx, ParamType::Number, other)),
        }
    }

    /// Return an optional number converted to a position (truncated toward zero).
    pub fn opt_integer(&self, idx: usize) -> CallResult<Option<i64>> {
        Ok(self.opt_number(idx)?.map(to_integer))
    }

    /// Return an optional boolean argument (`None` when absent or nil).
    pub fn opt_boolean(&self, idx: usize) -> CallResult<Option<bool>> {
        match self.get(idx) {
            None | Some(Value::Nil) => Ok(None),
            Some(Value::Boolean(b)) => Ok(Some(*b)),
            other => Err(self.mismatch(idx, ParamType::Boolean, other)),
        }
    }

    /// Check the supplied arguments against a declared parameter list.
    ///
    /// ## Notes
    /// - Arguments beyond the declared parameters are ignored.
    /// - A variadic parameter applies to every remaining argument; zero remaining arguments is fine.
    pub fn check_signature(&self, params: &[Param]) -> CallResult<()> {
        for (idx, param) in params.iter().enumerate() {
            if param.variadic {
                for rest in idx..self.values.len() {
                    self.check_param(rest, param)?;
                }
                return Ok(());
            }
            self.check_param(idx, param)?;
        }
        Ok(())
    }

    fn check_param(&self, idx: usize, param: &Param) -> CallResult<()> {
        let Some(value) = self.get(idx) else {
            return if param.optional {
                Ok(())
            } else {
                Err(self.type_error(idx, param.ty, Found::NoValue))
            };
        };
        let matches = match (param.ty, value.data_type()) {
            (ParamType::Any, _) => true,
            (_, DataType::Nil) => param.optional,
            (ParamType::String, DataType::String) => true,
            (ParamType::Number, DataType::Number) => true,
            (ParamType::Boolean, DataType::Boolean) => true,
            _ => false,
        };
        if matches {
            Ok(())
        } else {
            Err(self.mismatch(idx, param.ty, Some(value)))
        }
    }

    /// An absent argument reports "no value"; a supplied nil reports "nil".
    fn mismatch(&self, idx: usize, expected: ParamType, found: Option<&Value>) -> CallError {
        let found = found.map_or(Found::NoValue, |v| Found::Type(v.data_type()));
        self.type_error(idx, expected, found)
    }

    fn type_error(&self, idx: usize, expected: ParamType, found: Found) -> CallError {
        CallError::ArgumentType {
            function: self.function,
            position: idx + 1,
            expected,
            found,
        }
    }
}

/// Convert a host number to a logical position by truncation toward zero.
///
/// ## Notes
/// - Saturates at the `i64` bounds; NaN becomes `0`.
pub fn to_integer(n: f64) -> i64 {
    n as i64
}
