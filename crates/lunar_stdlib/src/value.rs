//! Host values passed into and returned from library calls.

use std::fmt;
use std::sync::{Arc, Mutex};

use lunar_core::LuaString;

/// The dynamic type of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Nil,
    Boolean,
    Number,
    String,
    Tuple,
    /// An iterator returned by `gmatch`; scripts see it as a function.
    Iterator,
}

impl DataType {
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Nil => "nil",
            DataType::Boolean => "boolean",
            DataType::Number => "number",
            DataType::String => "string",
            DataType::Tuple => "tuple",
            DataType::Iterator => "function",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A host value.
///
/// ## Notes
/// - `Tuple` carries multiple results in order. An empty tuple means "no values".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Nil,
    Boolean(bool),
    Number(f64),
    String(LuaString),
    Tuple(Vec<Value>),
    Iterator(MatchIter),
}

impl Value {
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Nil => DataType::Nil,
            Value::Boolean(_) => DataType::Boolean,
            Value::Number(_) => DataType::Number,
            Value::String(_) => DataType::String,
            Value::Tuple(_) => DataType::Tuple,
            Value::Iterator(_) => DataType::Iterator,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Build a tuple of numbers from integer codes.
    pub fn number_tuple(codes: impl IntoIterator<Item = i64>) -> Value {
        // Codes are code units or 1-based positions, so the conversion is exact.
        Value::Tuple(codes.into_iter().map(|c| Value::Number(c as f64)).collect())
    }

    /// Flatten a result into its individual values (a non-tuple is a single value).
    pub fn into_values(self) -> Vec<Value> {
        match self {
            Value::Tuple(values) => values,
            other => vec![other],
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(LuaString::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(LuaString::from(s))
    }
}

impl From<LuaString> for Value {
    fn from(s: LuaString) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::String(s) => write!(f, "{s}"),
            Value::Tuple(values) => {
                let parts: Vec<String> = values.iter().map(ToString::to_string).collect();
                f.write_str(&parts.join("\t"))
            }
            Value::Iterator(_) => f.write_str("function: gmatch"),
        }
    }
}

/// Format a number the way scripts print it: integral values without a fraction.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// One match produced by an iterator: its captures, or the whole match when there are none.
pub type Captures = Vec<Value>;

type BoxedMatches = Box<dyn Iterator<Item = Captures> + Send>;

/// A lazily advanced sequence of matches owned by a pattern engine.
///
/// ## Notes
/// - The iteration state belongs to the engine that produced it; this handle only advances it.
/// - Clones share the same state, like copies of a function value in a script.
#[derive(Clone)]
pub struct MatchIter {
    inner: Arc<Mutex<BoxedMatches>>,
}

impl MatchIter {
    pub fn new(matches: impl Iterator<Item = Captures> + Send + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(matches))),
        }
    }

    /// Advance to the next match, or `None` when exhausted.
    pub fn next_match(&self) -> Option<Captures> {
        let mut guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.next()
    }
}

impl Iterator for MatchIter {
    type Item = Captures;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_match()
    }
}

impl fmt::Debug for MatchIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchIter").finish_non_exhaustive()
    }
}

impl PartialEq for MatchIter {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
