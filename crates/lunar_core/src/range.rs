//! Normalize 1-based, negative-aware positions into concrete ranges.
//!
//! Two conventions live here and are deliberately not unified:
//! - [`StrRange`]: whole-range extraction (`sub`, `byte`, `unicode`). Both ends are clamped aggressively and an
//!   impossible request becomes an empty range.
//! - [`adjust_index`]: single-position lookup with an explicit default. Zero means "no such position" and the result
//!   is not clamped.
//!
//! ## Examples
//! ```rust
//! use lunar_core::range::StrRange;
//!
//! // "Hello, World!"[-6..-1] → "World!"
//! assert_eq!(StrRange::normalize(Some(-6), Some(-1), 13), Some(7..13));
//! // A start past the end is empty, not an error.
//! assert_eq!(StrRange::normalize(Some(20), None, 13), None);
//! ```

/// A zero-based, inclusive interval produced from a pair of logical positions.
///
/// ## Notes
/// - After [`StrRange::map_to_len`], the range is either empty (see [`StrRange::is_empty_for`]) or fully contained
///   in `[0, len - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrRange {
    pub start: i64,
    pub end: i64,
}

impl StrRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Convert 1-based logical coordinates into zero-based signed coordinates.
    ///
    /// ## Notes
    /// - Positive values shift down by one; zero and negative values are kept as-is so
    ///   [`StrRange::map_to_len`] can resolve them against the length.
    pub fn from_lua_range(start: i64, end: i64) -> Self {
        Self {
            start: if start > 0 { start - 1 } else { start },
            end: if end > 0 { end - 1 } else { end },
        }
    }

    /// Resolve negative coordinates against `len` and clamp to the sequence.
    ///
    /// ## Returns
    /// - (`StrRange`): the clamped range; check [`StrRange::is_empty_for`] before reading it.
    pub fn map_to_len(self, len: usize) -> Self {
        let len = len_i64(len);
        let mut start = self.start;
        let mut end = self.end;

        if start < 0 {
            start += len;
        }
        if start < 0 {
            start = 0;
        }

        // A still-negative end is left alone: it signals an empty range below.
        if end < 0 {
            end += len;
        }
        if end >= len {
            end = len - 1;
        }

        Self { start, end }
    }

    /// Check whether a mapped range selects nothing in a sequence of length `len`.
    pub fn is_empty_for(&self, len: usize) -> bool {
        self.start >= len_i64(len) || self.end < self.start
    }

    /// Number of positions covered. Only meaningful when the range is not empty.
    pub fn length(&self) -> i64 {
        self.end - self.start + 1
    }

    /// Normalize optional logical positions into a half-open `usize` range.
    ///
    /// ## Parameters
    /// - `start`: logical start (default `1`).
    /// - `end`: logical end (default `-1`, the last element).
    /// - `len`: length of the target sequence.
    ///
    /// ## Returns
    /// - `Some(range)`: a non-empty range contained in `0..len`.
    /// - `None`: the request selects nothing.
    pub fn normalize(start: Option<i64>, end: Option<i64>, len: usize) -> Option<std::ops::Range<usize>> {
        let range = Self::from_lua_range(start.unwrap_or(1), end.unwrap_or(-1)).map_to_len(len);
        range.to_bounds(len)
    }

    /// Convert a mapped range into half-open bounds, or `None` when empty.
    pub fn to_bounds(&self, len: usize) -> Option<std::ops::Range<usize>> {
        if self.is_empty_for(len) {
            return None;
        }
        // Not empty implies 0 <= start <= end < len.
        let start = usize::try_from(self.start).ok()?;
        let end = usize::try_from(self.end).ok()?;
        Some(start..end + 1)
    }
}

/// Adjust a single logical position into a zero-based index.
///
/// ## Parameters
/// - `len`: length of the target sequence.
/// - `raw`: the logical position, or `None` when the caller omitted it.
/// - `default`: the zero-based index used when `raw` is `None`.
///
/// ## Returns
/// - `Some(idx)`: a zero-based index; **not clamped**, so it may fall outside `0..len`.
/// - `None`: `raw` was `0`, which names no position.
pub fn adjust_index(len: usize, raw: Option<i64>, default: i64) -> Option<i64> {
    match raw {
        None => Some(default),
        Some(0) => None,
        Some(v) if v > 0 => Some(v - 1),
        Some(v) => Some(len_i64(len).saturating_add(v)),
    }
}

fn len_i64(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}
