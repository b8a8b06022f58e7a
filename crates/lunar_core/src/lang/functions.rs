//! String library function vocabulary.
//!
//! This module defines the canonical set of functions exposed under the `string` namespace. Callers should use the
//! stable identifier [`StringFnId`] for identity and query spellings, signatures and other metadata through
//! [`StringFnInfo`] / [`STRING_FUNCTIONS`].
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - The parameter lists here are what hosts validate against before dispatching a call.
//!
//! ## Examples
//! ```rust
//! use lunar_core::lang::functions::{self, StringFnId};
//!
//! assert_eq!(functions::from_str("sub"), Some(StringFnId::Sub));
//! assert_eq!(functions::as_str(StringFnId::Sub), "sub");
//! assert_eq!(functions::info_for(StringFnId::Sub).signature(), "sub(s: string, i?: number, j?: number)");
//! ```

use super::registry::{Example, LangItemInfo, Origin, Param, ParamType};

/// Stable identifier for a string library function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringFnId {
    Len,
    Sub,
    Byte,
    Unicode,
    Char,
    Lower,
    Upper,
    Rep,
    Reverse,
    Match,
    GMatch,
    GSub,
    Find,
}

/// Metadata for a string library function.
pub type StringFnInfo = LangItemInfo<StringFnId>;

const S: Param = Param::required("s", ParamType::String);
const PATTERN: Param = Param::required("pattern", ParamType::String);
const I: Param = Param::optional("i", ParamType::Number);
const J: Param = Param::optional("j", ParamType::Number);
const N: Param = Param::required("n", ParamType::Number);
const MAX_N: Param = Param::optional("n", ParamType::Number);
const INIT: Param = Param::optional("init", ParamType::Number);
const PLAIN: Param = Param::optional("plain", ParamType::Boolean);
const REPL: Param = Param::required("repl", ParamType::Any);
const CODES: Param = Param::variadic("codes", ParamType::Number);

/// Registry of all string library functions.
pub const STRING_FUNCTIONS: &[StringFnInfo] = &[
    info(
        StringFnId::Len,
        "len",
        "Return the length of a string in code units.",
        &[S],
        &[Example {
            code: r#"string.len("lua")"#,
            result: "3",
        }],
    ),
    info(
        StringFnId::Sub,
        "sub",
        "Return the substring from position `i` (default 1) to `j` (default -1), clamped to the string.",
        &[S, I, J],
        &[
            Example {
                code: r#"string.sub("Hello, World!", 1, 5)"#,
                result: r#""Hello""#,
            },
            Example {
                code: r#"string.sub("Hello, World!", -6)"#,
                result: r#""World!""#,
            },
        ],
    ),
    info(
        StringFnId::Byte,
        "byte",
        "Return the byte code of each unit from `i` (default 1) to `j` (default `i`); wide units become `?`.",
        &[S, I, J],
        &[Example {
            code: r#"string.byte("Hello", 1, 1)"#,
            result: "72",
        }],
    ),
    LangItemInfo {
        origin: Origin::Extension,
        ..info(
            StringFnId::Unicode,
            "unicode",
            "Return the full code of each unit from `i` (default 1) to `j` (default `i`).",
            &[S, I, J],
            &[],
        )
    },
    info(
        StringFnId::Char,
        "char",
        "Build a string with one unit per numeric code argument.",
        &[CODES],
        &[Example {
            code: "string.char(65, 66, 67)",
            result: r#""ABC""#,
        }],
    ),
    info(
        StringFnId::Lower,
        "lower",
        "Return a lowercase copy of the string (locale-naive).",
        &[S],
        &[],
    ),
    info(
        StringFnId::Upper,
        "upper",
        "Return an uppercase copy of the string (locale-naive).",
        &[S],
        &[],
    ),
    info(
        StringFnId::Rep,
        "rep",
        "Return `n` concatenated copies of the string; empty when `n < 1`.",
        &[S, N],
        &[Example {
            code: r#"string.rep("ab", 3)"#,
            result: r#""ababab""#,
        }],
    ),
    info(
        StringFnId::Reverse,
        "reverse",
        "Return the string with its code units in reverse order.",
        &[S],
        &[],
    ),
    info(
        StringFnId::Match,
        "match",
        "Return the first match of `pattern` starting at `init` (default 1).",
        &[S, PATTERN, INIT],
        &[],
    ),
    info(
        StringFnId::GMatch,
        "gmatch",
        "Return an iterator over successive matches of `pattern`.",
        &[S, PATTERN],
        &[],
    ),
    info(
        StringFnId::GSub,
        "gsub",
        "Replace up to `n` matches of `pattern` with `repl`; returns the new string and the count.",
        &[S, PATTERN, REPL, MAX_N],
        &[],
    ),
    info(
        StringFnId::Find,
        "find",
        "Return the start and end positions of the first match of `pattern`, optionally as a plain substring.",
        &[S, PATTERN, INIT, PLAIN],
        &[Example {
            code: r#"string.find("Hello", "ll", 1, true)"#,
            result: "3, 4",
        }],
    ),
];

/// Return the canonical spelling for a string function.
pub fn as_str(id: StringFnId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a string function.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: StringFnId) -> &'static StringFnInfo {
    STRING_FUNCTIONS
        .iter()
        .find(|f| f.id == id)
        .expect("INVARIANT: every StringFnId has a registry entry")
}

/// Resolve a spelling to a string function identifier.
///
/// ## Returns
/// - `Some(StringFnId)` if `name` matches a canonical spelling or alias.
/// - `None` otherwise.
pub fn from_str(name: &str) -> Option<StringFnId> {
    lookup(name).map(|f| f.id)
}

/// Resolve a spelling to its registry entry.
pub fn lookup(name: &str) -> Option<&'static StringFnInfo> {
    STRING_FUNCTIONS
        .iter()
        .find(|f| f.canonical == name)
        .or_else(|| {
            STRING_FUNCTIONS.iter().find(|f| {
                let aliases: &[&str] = f.aliases;
                aliases.contains(&name)
            })
        })
}

const fn info(
    id: StringFnId,
    canonical: &'static str,
    description: &'static str,
    params: &'static [Param],
    examples: &'static [Example],
) -> StringFnInfo {
    LangItemInfo {
        id,
        canonical,
        aliases: &[],
        description,
        params,
        origin: Origin::Lua,
        examples,
    }
}
