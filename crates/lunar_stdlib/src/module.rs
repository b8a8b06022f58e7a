//! The `string` module: a name → native function table plus the [`StringLib`] entry point.
//!
//! The table is built once from [`STRING_FUNCTIONS`] and is read-only afterwards. Each entry pairs the registry
//! metadata (canonical name, declared parameters) with a native function pointer, so arity and argument types are
//! checked generically before any native code runs.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use lunar_core::lang::functions::{STRING_FUNCTIONS, StringFnId, StringFnInfo};
use lunar_core::strings::{
    StringAccessError, str_byte, str_char, str_len, str_lower, str_rep, str_reverse, str_sub, str_unicode, str_upper,
};

use crate::args::{CallArgs, to_integer};
use crate::config::StringLibConfig;
use crate::errors::{CallError, CallResult};
use crate::pattern::{LiteralEngine, PatternEngine};
use crate::value::Value;

/// Signature shared by every native library function.
pub type NativeFn = fn(&StringLib, &CallArgs<'_>) -> CallResult<Value>;

#[derive(Clone, Copy)]
struct NativeEntry {
    info: &'static StringFnInfo,
    call: NativeFn,
}

fn native_for(id: StringFnId) -> NativeFn {
    match id {
        StringFnId::Len => len,
        StringFnId::Sub => sub,
        StringFnId::Byte => byte,
        StringFnId::Unicode => unicode,
        StringFnId::Char => char_from_codes,
        StringFnId::Lower => lower,
        StringFnId::Upper => upper,
        StringFnId::Rep => rep,
        StringFnId::Reverse => reverse,
        StringFnId::Match => match_pattern,
        StringFnId::GMatch => gmatch,
        StringFnId::GSub => gsub,
        StringFnId::Find => find,
    }
}

static DISPATCH: LazyLock<HashMap<&'static str, NativeEntry>> = LazyLock::new(|| {
    let mut table = HashMap::with_capacity(STRING_FUNCTIONS.len());
    for info in STRING_FUNCTIONS {
        let entry = NativeEntry {
            info,
            call: native_for(info.id),
        };
        table.insert(info.canonical, entry);
        for &alias in info.aliases {
            table.insert(alias, entry);
        }
    }
    table
});

/// The string library bound to a pattern engine and a configuration.
///
/// ## Examples
/// ```rust
/// use lunar_stdlib::{StringLib, Value};
///
/// let lib = StringLib::new();
/// let out = lib.call("sub", &[Value::from("Hello, World!"), Value::from(1.0), Value::from(5.0)]).unwrap();
/// assert_eq!(out, Value::from("Hello"));
/// ```
#[derive(Clone)]
pub struct StringLib {
    engine: Arc<dyn PatternEngine>,
    config: StringLibConfig,
}

impl std::fmt::Debug for StringLib {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringLib").field("config", &self.config).finish_non_exhaustive()
    }
}

impl Default for StringLib {
    fn default() -> Self {
        Self::new()
    }
}

impl StringLib {
    /// Create a library backed by [`LiteralEngine`] with default settings.
    pub fn new() -> Self {
        Self::with_engine(LiteralEngine)
    }

    /// Create a library that delegates pattern operations to `engine`.
    pub fn with_engine(engine: impl PatternEngine + 'static) -> Self {
        Self {
            engine: Arc::new(engine),
            config: StringLibConfig::default(),
        }
    }

    pub fn with_config(mut self, config: StringLibConfig) -> Self {
        self.config = config;
        self
    }

    /// Return the registry entries of every callable function.
    pub fn functions() -> &'static [StringFnInfo] {
        STRING_FUNCTIONS
    }

    /// Call a library function by name.
    ///
    /// ## Errors
    /// - [`CallError::UnknownFunction`] if `name` is not registered.
    /// - [`CallError::ArgumentType`] / [`CallError::ValueOutOfRange`] for bad arguments.
    /// - [`CallError::Pattern`] when the pattern engine fails.
    #[tracing::instrument(skip_all, fields(function = name, argc = args.len()))]
    pub fn call(&self, name: &str, args: &[Value]) -> CallResult<Value> {
        let Some(entry) = DISPATCH.get(name) else {
            tracing::debug!("unknown string function");
            return Err(CallError::UnknownFunction(name.to_string()));
        };

        let call_args = CallArgs::new(entry.info.canonical, args);
        if let Err(err) = call_args.check_signature(entry.info.params) {
            tracing::debug!(%err, "argument check failed");
            return Err(err);
        }

        let result = (entry.call)(self, &call_args)?;
        tracing::trace!(%result, "call returned");
        Ok(result)
    }

    /// Call a function as a method on `receiver` (`s:name(args...)`).
    ///
    /// ## Errors
    /// - [`CallError::NoMethods`] when the method surface is disabled in the config.
    /// - Everything [`StringLib::call`] can return.
    pub fn call_method(&self, receiver: Value, name: &str, args: &[Value]) -> CallResult<Value> {
        if !self.config.string_methods {
            return Err(CallError::NoMethods);
        }
        let mut full = Vec::with_capacity(args.len() + 1);
        full.push(receiver);
        full.extend_from_slice(args);
        self.call(name, &full)
    }
}

// ---- Native functions ---------------------------------------------------------------------------

fn len(_lib: &StringLib, args: &CallArgs<'_>) -> CallResult<Value> {
    let s = args.string(0)?;
    Ok(Value::Number(str_len(s) as f64))
}

fn sub(_lib: &StringLib, args: &CallArgs<'_>) -> CallResult<Value> {
    let s = args.string(0)?;
    let i = args.opt_integer(1)?;
    let j = args.opt_integer(2)?;
    Ok(Value::String(str_sub(s, i, j)))
}

fn byte(lib: &StringLib, args: &CallArgs<'_>) -> CallResult<Value> {
    let s = args.string(0)?;
    let i = args.opt_integer(1)?;
    let j = args.opt_integer(2)?;
    Ok(Value::number_tuple(str_byte(s, i, j, lib.config.placeholder_unit())))
}

fn unicode(_lib: &StringLib, args: &CallArgs<'_>) -> CallResult<Value> {
    let s = args.string(0)?;
    let i = args.opt_integer(1)?;
    let j = args.opt_integer(2)?;
    Ok(Value::number_tuple(str_unicode(s, i, j)))
}

fn char_from_codes(_lib: &StringLib, args: &CallArgs<'_>) -> CallResult<Value> {
    let mut codes = Vec::with_capacity(args.len());
    for idx in 0..args.len() {
        codes.push(to_integer(args.number(idx)?));
    }
    str_char(&codes).map(Value::String).map_err(|err| access_error(args, err))
}

fn lower(_lib: &StringLib, args: &CallArgs<'_>) -> CallResult<Value> {
    Ok(Value::String(str_lower(args.string(0)?)))
}

fn upper(_lib: &StringLib, args: &CallArgs<'_>) -> CallResult<Value> {
    Ok(Value::String(str_upper(args.string(0)?)))
}

fn rep(_lib: &StringLib, args: &CallArgs<'_>) -> CallResult<Value> {
    let s = args.string(0)?;
    let n = args.number(1)?;
    // Compare before truncating so 0.5 counts as "less than one".
    if n < 1.0 {
        return Ok(Value::String(lunar_core::LuaString::new()));
    }
    str_rep(s, to_integer(n)).map(Value::String).map_err(|err| access_error(args, err))
}

fn reverse(_lib: &StringLib, args: &CallArgs<'_>) -> CallResult<Value> {
    Ok(Value::String(str_reverse(args.string(0)?)))
}

/// Attribute a primitive's failure to the current call.
fn access_error(args: &CallArgs<'_>, err: StringAccessError) -> CallError {
    match err {
        StringAccessError::CodeOutOfRange { position } => CallError::ValueOutOfRange {
            function: args.function(),
            position: position + 1,
        },
        StringAccessError::ResultTooLarge => CallError::ResultTooLarge {
            function: args.function(),
        },
    }
}

/// Read an optional position where NaN counts as absent.
fn opt_position(args: &CallArgs<'_>, idx: usize) -> CallResult<Option<i64>> {
    Ok(args.opt_number(idx)?.filter(|n| !n.is_nan()).map(to_integer))
}

fn match_pattern(lib: &StringLib, args: &CallArgs<'_>) -> CallResult<Value> {
    let s = args.string(0)?;
    let pattern = args.string(1)?;
    let init = opt_position(args, 2)?.unwrap_or(1);
    Ok(lib.engine.r#match(s, pattern, init)?)
}

fn gmatch(lib: &StringLib, args: &CallArgs<'_>) -> CallResult<Value> {
    let s = args.string(0)?;
    let pattern = args.string(1)?;
    Ok(Value::Iterator(lib.engine.gmatch(s, pattern)?))
}

fn gsub(lib: &StringLib, args: &CallArgs<'_>) -> CallResult<Value> {
    let s = args.string(0)?;
    let pattern = args.string(1)?;
    let repl = args.any(2)?;
    let max = opt_position(args, 3)?;
    Ok(lib.engine.gsub(s, pattern, repl, max)?)
}

fn find(lib: &StringLib, args: &CallArgs<'_>) -> CallResult<Value> {
    let s = args.string(0)?;
    let pattern = args.string(1)?;
    let init = opt_position(args, 2)?.unwrap_or(i64::MIN);
    let plain = args.opt_boolean(3)?.unwrap_or(false);
    Ok(lib.engine.find(s, pattern, init, plain)?)
}
