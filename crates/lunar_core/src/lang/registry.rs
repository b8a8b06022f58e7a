//! Shareable metadata for `lunar_core::lang` registries.
//!
//! These types describe library vocabulary (function names, parameter signatures, provenance) in a form that can
//! live in `const` tables. Hosts use them to build dispatch tables and to validate arguments before a call; the
//! reference generator uses them for docs.
//!
//! ## Notes
//! - Everything here is `Copy` and allocation-free.

use std::fmt;

/// Describe where a library function comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Part of the standard Lua `string` library.
    Lua,
    /// Not in standard Lua; provided for hosts with wide character strings.
    Extension,
}

/// The kind of value a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    String,
    Number,
    Boolean,
    /// Any value, including nil. The function inspects it itself.
    Any,
}

impl ParamType {
    /// Return the user-facing type name (as used in "string expected" messages).
    pub fn as_str(self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Boolean => "boolean",
            ParamType::Any => "value",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single declared parameter.
///
/// ## Notes
/// - When `variadic` is set, the parameter repeats for every remaining argument; it must be the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub ty: ParamType,
    pub optional: bool,
    pub variadic: bool,
}

impl Param {
    pub const fn required(name: &'static str, ty: ParamType) -> Self {
        Self {
            name,
            ty,
            optional: false,
            variadic: false,
        }
    }

    pub const fn optional(name: &'static str, ty: ParamType) -> Self {
        Self {
            name,
            ty,
            optional: true,
            variadic: false,
        }
    }

    pub const fn variadic(name: &'static str, ty: ParamType) -> Self {
        Self {
            name,
            ty,
            optional: false,
            variadic: true,
        }
    }
}

/// Represent a small example call for documentation.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub result: &'static str,
}

/// Shared metadata shape for registry items.
///
/// ## Notes
/// - `description` is mandatory to keep docs/tooling consistent.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub params: &'static [Param],
    pub origin: Origin,
    pub examples: &'static [Example],
}

impl<Id> LangItemInfo<Id> {
    /// Render the parameter list as `name(a: string, b?: number, ...: number)`.
    pub fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|p| {
                if p.variadic {
                    format!("{}...: {}", p.name, p.ty.as_str())
                } else if p.optional {
                    format!("{}?: {}", p.name, p.ty.as_str())
                } else {
                    format!("{}: {}", p.name, p.ty.as_str())
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({params})", self.canonical)
    }
}
