//! The pattern-matching boundary.
//!
//! The library does not interpret patterns. `match`, `gmatch`, `gsub` and `find` validate their arguments, fill in
//! defaults and hand everything to a [`PatternEngine`]; whatever the engine returns (or fails with) is passed back
//! unchanged.
//!
//! [`LiteralEngine`] is the bundled engine. It treats every pattern as a plain substring, which is enough for hosts
//! that do not need the pattern grammar and keeps the delegated operations usable out of the box.

use lunar_core::{LuaString, adjust_index};

use crate::errors::PatternError;
use crate::value::{Captures, MatchIter, Value, format_number};

/// An engine that implements the pattern-based string operations.
///
/// ## Notes
/// - `init` values are logical positions exactly as the script passed them (1-based, negative from the end). `find`
///   receives `i64::MIN` when the script omitted `init`.
/// - Iteration state for [`PatternEngine::gmatch`] belongs to the returned [`MatchIter`].
pub trait PatternEngine: Send + Sync {
    /// Locate the first match at or after `init`.
    ///
    /// Returns `Tuple(start, end, captures...)` with 1-based inclusive positions, or `Nil`.
    fn find(&self, s: &LuaString, pattern: &LuaString, init: i64, plain: bool) -> Result<Value, PatternError>;

    /// Return the captures of the first match at or after `init` (the whole match when there are none), or `Nil`.
    fn r#match(&self, s: &LuaString, pattern: &LuaString, init: i64) -> Result<Value, PatternError>;

    /// Start a fresh iteration over successive matches.
    fn gmatch(&self, s: &LuaString, pattern: &LuaString) -> Result<MatchIter, PatternError>;

    /// Replace up to `max` matches (all when `None`). Returns `Tuple(String, Number(count))`.
    fn gsub(&self, s: &LuaString, pattern: &LuaString, repl: &Value, max: Option<i64>) -> Result<Value, PatternError>;
}

/// A [`PatternEngine`] that matches every pattern as a literal substring.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralEngine;

/// Find `needle` in `hay` at or after `from`. The empty needle matches at `from` itself (up to `hay.len()`).
fn search(hay: &[u16], needle: &[u16], from: usize) -> Option<usize> {
    if from > hay.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(from);
    }
    hay[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|offset| from + offset)
}

/// Resolve a logical `init` into a zero-based search offset, or `None` when it lies past the end.
fn start_offset(len: usize, init: i64) -> Option<usize> {
    // 0 names no position; like a position before the start, it searches from the beginning.
    let idx = adjust_index(len, Some(init), 0).unwrap_or(0).max(0);
    let idx = usize::try_from(idx).ok()?;
    (idx <= len).then_some(idx)
}

fn position(idx: usize) -> Value {
    Value::Number(idx as f64)
}

fn replacement_units(repl: &Value) -> Result<Vec<u16>, PatternError> {
    match repl {
        Value::String(s) => Ok(s.units().to_vec()),
        Value::Number(n) => Ok(format_number(*n).encode_utf16().collect()),
        other => Err(PatternError::BadReplacement(other.data_type())),
    }
}

const PERCENT: u16 = b'%' as u16;

/// Append `repl` to `out`, expanding `%0`/`%1` to the match and `%%` to `%`.
fn expand_replacement(repl: &[u16], matched: &[u16], out: &mut Vec<u16>) -> Result<(), PatternError> {
    let mut units = repl.iter().copied();
    while let Some(unit) = units.next() {
        if unit != PERCENT {
            out.push(unit);
            continue;
        }
        match units.next() {
            Some(PERCENT) => out.push(PERCENT),
            Some(u) if u == u16::from(b'0') || u == u16::from(b'1') => out.extend_from_slice(matched),
            _ => return Err(PatternError::InvalidReplacement),
        }
    }
    Ok(())
}

struct LiteralMatches {
    hay: Vec<u16>,
    needle: Vec<u16>,
    pos: usize,
}

impl Iterator for LiteralMatches {
    type Item = Captures;

    fn next(&mut self) -> Option<Self::Item> {
        let at = search(&self.hay, &self.needle, self.pos)?;
        self.pos = if self.needle.is_empty() { at + 1 } else { at + self.needle.len() };
        let matched = self.hay[at..at + self.needle.len()].to_vec();
        Some(vec![Value::String(LuaString::from_units(matched))])
    }
}

impl PatternEngine for LiteralEngine {
    /// Find the first literal occurrence of `pattern` at or after `init`.
    ///
    /// ## Notes
    /// - `plain` has no effect: every pattern is already matched literally.
    fn find(&self, s: &LuaString, pattern: &LuaString, init: i64, _plain: bool) -> Result<Value, PatternError> {
        let Some(from) = start_offset(s.len(), init) else {
            return Ok(Value::Nil);
        };
        Ok(match search(s.units(), pattern.units(), from) {
            Some(at) => Value::Tuple(vec![position(at + 1), position(at + pattern.len())]),
            None => Value::Nil,
        })
    }

    fn r#match(&self, s: &LuaString, pattern: &LuaString, init: i64) -> Result<Value, PatternError> {
        let Some(from) = start_offset(s.len(), init) else {
            return Ok(Value::Nil);
        };
        Ok(match search(s.units(), pattern.units(), from) {
            Some(at) => Value::String(s.slice(at..at + pattern.len())),
            None => Value::Nil,
        })
    }

    fn gmatch(&self, s: &LuaString, pattern: &LuaString) -> Result<MatchIter, PatternError> {
        Ok(MatchIter::new(LiteralMatches {
            hay: s.units().to_vec(),
            needle: pattern.units().to_vec(),
            pos: 0,
        }))
    }

    fn gsub(&self, s: &LuaString, pattern: &LuaString, repl: &Value, max: Option<i64>) -> Result<Value, PatternError> {
        let repl = replacement_units(repl)?;
        let hay = s.units();
        let needle = pattern.units();
        // A negative limit replaces nothing.
        let limit = max.map_or(usize::MAX, |n| usize::try_from(n).unwrap_or(0));

        let mut out = Vec::with_capacity(hay.len());
        let mut pos = 0;
        let mut count = 0usize;
        while count < limit {
            let Some(at) = search(hay, needle, pos) else {
                break;
            };
            out.extend_from_slice(&hay[pos..at]);
            expand_replacement(&repl, &hay[at..at + needle.len()], &mut out)?;
            count += 1;
            if needle.is_empty() {
                if let Some(&unit) = hay.get(at) {
                    out.push(unit);
                }
                pos = at + 1;
            } else {
                pos = at + needle.len();
            }
        }
        if let Some(rest) = hay.get(pos..) {
            out.extend_from_slice(rest);
        }

        Ok(Value::Tuple(vec![
            Value::String(LuaString::from_units(out)),
            position(count),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ls(s: &str) -> LuaString {
        LuaString::from(s)
    }

    fn tuple(values: &[f64]) -> Value {
        Value::Tuple(values.iter().map(|&n| Value::Number(n)).collect())
    }

    #[test]
    fn test_find_positions_are_one_based() {
        let e = LiteralEngine;
        assert_eq!(e.find(&ls("Hello"), &ls("ll"), 1, true), Ok(tuple(&[3.0, 4.0])));
        assert_eq!(e.find(&ls("Hello"), &ls("xyz"), 1, true), Ok(Value::Nil));
    }

    #[test]
    fn test_find_ignores_plain_flag() {
        let e = LiteralEngine;
        let s = ls("a.c abc");
        assert_eq!(e.find(&s, &ls("a.c"), 1, false), e.find(&s, &ls("a.c"), 1, true));
        assert_eq!(e.find(&s, &ls("a.c"), 1, false), Ok(tuple(&[1.0, 3.0])));
    }

    #[test]
    fn test_find_init_handling() {
        let e = LiteralEngine;
        let s = ls("abcabc");
        assert_eq!(e.find(&s, &ls("abc"), 2, true), Ok(tuple(&[4.0, 6.0])));
        assert_eq!(e.find(&s, &ls("abc"), -3, true), Ok(tuple(&[4.0, 6.0])));
        assert_eq!(e.find(&s, &ls("abc"), i64::MIN, true), Ok(tuple(&[1.0, 3.0])));
        assert_eq!(e.find(&s, &ls("abc"), 0, true), Ok(tuple(&[1.0, 3.0])));
        assert_eq!(e.find(&s, &ls("a"), 8, true), Ok(Value::Nil));
    }

    #[test]
    fn test_find_empty_pattern() {
        let e = LiteralEngine;
        assert_eq!(e.find(&ls("abc"), &ls(""), 2, true), Ok(tuple(&[2.0, 1.0])));
        assert_eq!(e.find(&ls("abc"), &ls(""), 4, true), Ok(tuple(&[4.0, 3.0])));
        assert_eq!(e.find(&ls("abc"), &ls(""), 5, true), Ok(Value::Nil));
    }

    #[test]
    fn test_match_returns_matched_text() {
        let e = LiteralEngine;
        assert_eq!(e.r#match(&ls("hello world"), &ls("world"), 1), Ok(Value::from("world")));
        assert_eq!(e.r#match(&ls("hello world"), &ls("hello"), 2), Ok(Value::Nil));
    }

    #[test]
    fn test_gmatch_non_overlapping() {
        let e = LiteralEngine;
        let found: Vec<_> = e.gmatch(&ls("aaaa"), &ls("aa")).unwrap().collect();
        assert_eq!(found.len(), 2);

        let empty: Vec<_> = e.gmatch(&ls("ab"), &ls("")).unwrap().collect();
        assert_eq!(empty.len(), 3);
    }

    #[test]
    fn test_gsub_replaces_and_counts() {
        let e = LiteralEngine;
        assert_eq!(
            e.gsub(&ls("hello world"), &ls("o"), &Value::from("0"), None),
            Ok(Value::Tuple(vec![Value::from("hell0 w0rld"), Value::Number(2.0)]))
        );
        assert_eq!(
            e.gsub(&ls("hello world"), &ls("o"), &Value::from("0"), Some(1)),
            Ok(Value::Tuple(vec![Value::from("hell0 world"), Value::Number(1.0)]))
        );
        assert_eq!(
            e.gsub(&ls("abc"), &ls("b"), &Value::from("x"), Some(-1)),
            Ok(Value::Tuple(vec![Value::from("abc"), Value::Number(0.0)]))
        );
    }

    #[test]
    fn test_gsub_empty_pattern_inserts_everywhere() {
        let e = LiteralEngine;
        assert_eq!(
            e.gsub(&ls("abc"), &ls(""), &Value::from("-"), None),
            Ok(Value::Tuple(vec![Value::from("-a-b-c-"), Value::Number(4.0)]))
        );
        assert_eq!(
            e.gsub(&ls("abc"), &ls(""), &Value::from("-"), Some(2)),
            Ok(Value::Tuple(vec![Value::from("-a-bc"), Value::Number(2.0)]))
        );
    }

    #[test]
    fn test_gsub_replacement_escapes() {
        let e = LiteralEngine;
        assert_eq!(
            e.gsub(&ls("cat"), &ls("a"), &Value::from("<%0%%>"), None),
            Ok(Value::Tuple(vec![Value::from("c<a%>t"), Value::Number(1.0)]))
        );
        assert_eq!(
            e.gsub(&ls("cat"), &ls("a"), &Value::from("%2"), None),
            Err(PatternError::InvalidReplacement)
        );
    }

    #[test]
    fn test_gsub_number_and_bad_replacements() {
        let e = LiteralEngine;
        assert_eq!(
            e.gsub(&ls("a-b"), &ls("-"), &Value::Number(7.0), None),
            Ok(Value::Tuple(vec![Value::from("a7b"), Value::Number(1.0)]))
        );
        assert_eq!(
            e.gsub(&ls("a-b"), &ls("-"), &Value::Boolean(true), None),
            Err(PatternError::BadReplacement(crate::value::DataType::Boolean))
        );
    }
}
