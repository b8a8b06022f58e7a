//! Define the string primitives (policy + pure helpers).
//!
//! Every function here is a pure function of its inputs. Positional primitives route through
//! [`crate::range::StrRange`]; none of them fail on out-of-range positions.
//!
//! ## Notes
//! - **Indexing model**: UTF-16 code units (see [`crate::lua_string`]), 1-based, negative from the end.
//! - **Empty results**: an empty range, an empty source or a non-positive repeat count produce an empty string or an
//!   empty vector. They are never errors.

use crate::errors::{CODE_OUT_OF_RANGE_MSG, RESULT_TOO_LARGE_MSG};
use crate::lua_string::LuaString;
use crate::range::StrRange;

/// Default placeholder for units the byte filter cannot represent.
pub const BYTE_PLACEHOLDER: u16 = b'?' as u16;

/// Highest code accepted by [`str_char`].
pub const MAX_CODE_UNIT: i64 = u16::MAX as i64;

/// Most code units a [`str_rep`] result may hold (a `Vec<u16>` cannot exceed `isize::MAX` bytes).
pub const MAX_STRING_UNITS: usize = isize::MAX as usize / size_of::<u16>();

/// Represent failures of the few primitives that validate their input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringAccessError {
    /// A character code at zero-based `position` cannot be represented as a code unit.
    CodeOutOfRange { position: usize },
    /// A repetition would produce more than [`MAX_STRING_UNITS`] units.
    ResultTooLarge,
}

impl StringAccessError {
    /// Return the canonical error message for this access error.
    pub fn message(self) -> &'static str {
        match self {
            StringAccessError::CodeOutOfRange { .. } => CODE_OUT_OF_RANGE_MSG,
            StringAccessError::ResultTooLarge => RESULT_TOO_LARGE_MSG,
        }
    }
}

/// Return the string length in code units.
pub fn str_len(s: &LuaString) -> usize {
    s.len()
}

/// Extract a substring.
///
/// ## Parameters
/// - `s`: the source string.
/// - `start`: logical start (default `1`).
/// - `end`: logical end (default `-1`).
///
/// ## Returns
/// - (`LuaString`): the units in the normalized range; empty when the range is empty.
///
/// ## Examples
/// ```rust
/// use lunar_core::lua_string::LuaString;
/// use lunar_core::strings::str_sub;
///
/// let s = LuaString::from("Hello, World!");
/// assert_eq!(str_sub(&s, Some(1), Some(5)), "Hello");
/// assert_eq!(str_sub(&s, Some(-6), None), "World!");
/// ```
pub fn str_sub(s: &LuaString, start: Option<i64>, end: Option<i64>) -> LuaString {
    match StrRange::normalize(start, end, s.len()) {
        Some(range) => s.slice(range),
        None => LuaString::new(),
    }
}

/// Map a unit through the byte truncation filter.
///
/// Values in `[0, 255)` pass through; anything else becomes `placeholder`.
pub fn truncate_unit(unit: u16, placeholder: u16) -> u16 {
    if unit < 255 { unit } else { placeholder }
}

fn codes_in_range(s: &LuaString, start: Option<i64>, end: Option<i64>, filter: impl Fn(u16) -> u16) -> Vec<i64> {
    let start = start.unwrap_or(1);
    let end = end.unwrap_or(start);
    let range = StrRange::from_lua_range(start, end).map_to_len(s.len());
    match range.to_bounds(s.len()) {
        Some(bounds) => s.units()[bounds].iter().map(|&u| i64::from(filter(u))).collect(),
        None => Vec::new(),
    }
}

/// Return the byte codes of a range of units.
///
/// ## Parameters
/// - `s`: the source string.
/// - `start`: logical start (default `1`).
/// - `end`: logical end (defaults to `start`, so the default is a single unit).
/// - `placeholder`: replacement for units outside `[0, 255)`, usually [`BYTE_PLACEHOLDER`].
///
/// ## Returns
/// - (`Vec<i64>`): one code per unit in the range; empty when the range is empty.
pub fn str_byte(s: &LuaString, start: Option<i64>, end: Option<i64>, placeholder: u16) -> Vec<i64> {
    codes_in_range(s, start, end, |u| truncate_unit(u, placeholder))
}

/// Return the full code units of a range (like [`str_byte`] without truncation).
pub fn str_unicode(s: &LuaString, start: Option<i64>, end: Option<i64>) -> Vec<i64> {
    codes_in_range(s, start, end, |u| u)
}

/// Build a string from character codes, one unit per code.
///
/// ## Returns
/// - `Ok(LuaString)`: the constructed string.
/// - `Err(StringAccessError::CodeOutOfRange)`: the first code outside `[0, 0xFFFF]`.
pub fn str_char(codes: &[i64]) -> Result<LuaString, StringAccessError> {
    let mut units = Vec::with_capacity(codes.len());
    for (position, &code) in codes.iter().enumerate() {
        let unit = u16::try_from(code).map_err(|_| StringAccessError::CodeOutOfRange { position })?;
        units.push(unit);
    }
    Ok(LuaString::from_units(units))
}

/// Map `ch` through a case conversion when the result is one character of the same width.
fn map_single<I>(ch: char, map: impl Fn(char) -> I) -> char
where
    I: Iterator<Item = char>,
{
    let mut mapped = map(ch);
    match (mapped.next(), mapped.next()) {
        (Some(single), None) if single.len_utf16() == ch.len_utf16() => single,
        _ => ch,
    }
}

fn map_chars<I>(s: &LuaString, map: impl Fn(char) -> I) -> LuaString
where
    I: Iterator<Item = char>,
{
    let mut out = Vec::with_capacity(s.len());
    let mut buf = [0u16; 2];
    for decoded in char::decode_utf16(s.units().iter().copied()) {
        match decoded {
            Ok(ch) => out.extend_from_slice(map_single(ch, &map).encode_utf16(&mut buf)),
            // Unpaired surrogates have no case; keep them untouched.
            Err(err) => out.push(err.unpaired_surrogate()),
        }
    }
    LuaString::from_units(out)
}

/// Convert a string to lowercase (locale-naive, per character).
///
/// ## Notes
/// - The length in units never changes. A character whose lowercase form is several characters (`İ`) is kept as is.
pub fn str_lower(s: &LuaString) -> LuaString {
    map_chars(s, char::to_lowercase)
}

/// Convert a string to uppercase (locale-naive, per character).
///
/// ## Notes
/// - The length in units never changes. A character whose uppercase form is several characters (`ß`) is kept as is.
pub fn str_upper(s: &LuaString) -> LuaString {
    map_chars(s, char::to_uppercase)
}

/// Repeat a string `count` times.
///
/// ## Returns
/// - `Ok(LuaString)`: `count` copies of `s`; empty when `s` is empty or `count < 1`.
/// - `Err(StringAccessError::ResultTooLarge)`: the result would exceed [`MAX_STRING_UNITS`].
///
/// ## Notes
/// - Results below the limit are not capped further. A request that fits the limit but not in memory still aborts
///   the process, so hosts that run untrusted scripts should bound `count` themselves.
pub fn str_rep(s: &LuaString, count: i64) -> Result<LuaString, StringAccessError> {
    if s.is_empty() || count < 1 {
        return Ok(LuaString::new());
    }
    let count = usize::try_from(count).map_err(|_| StringAccessError::ResultTooLarge)?;
    match s.len().checked_mul(count) {
        Some(total) if total <= MAX_STRING_UNITS => Ok(LuaString::from_units(s.units().repeat(count))),
        _ => Err(StringAccessError::ResultTooLarge),
    }
}

/// Reverse a string unit by unit.
///
/// ## Notes
/// - Surrogate pairs are reversed too, so non-BMP characters come out as unpaired surrogates.
pub fn str_reverse(s: &LuaString) -> LuaString {
    let mut units = s.units().to_vec();
    units.reverse();
    LuaString::from_units(units)
}
