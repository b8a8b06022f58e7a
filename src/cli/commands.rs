//! CLI command implementations
//!
//! All command functions return `CliResult<T>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use lunar_core::lang::registry::Origin;
use lunar_stdlib::value::format_number;
use lunar_stdlib::{StringLib, StringLibConfig, Value};

use super::literal::parse_args;
use super::{CliError, CliResult};

/// Options for the `call` subcommand.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Render results as a JSON array instead of one value per line
    pub json: bool,
    /// Treat the first argument as a method receiver
    pub method: bool,
    /// Override for the `byte` placeholder
    pub placeholder: Option<char>,
    /// Whether the method-call surface is enabled
    pub string_methods: bool,
}

impl CallOptions {
    fn config(&self) -> StringLibConfig {
        let mut config = StringLibConfig::new().with_string_methods(self.string_methods);
        if let Some(placeholder) = self.placeholder {
            config = config.with_byte_placeholder(placeholder);
        }
        config
    }
}

/// Call `function` with raw command-line arguments and render the result.
///
/// ## Returns
/// - The rendered output (possibly empty when the call returned no values).
///
/// ## Errors
/// - Any library error, formatted for display.
pub fn call_function(function: &str, raw_args: &[String], options: &CallOptions) -> CliResult<String> {
    let lib = StringLib::new().with_config(options.config());
    let mut args = parse_args(raw_args);
    tracing::debug!(function, argc = args.len(), method = options.method, "calling");

    let outcome = if options.method {
        if args.is_empty() {
            return Err(CliError::failure("Error: --method requires a receiver argument"));
        }
        let receiver = args.remove(0);
        lib.call_method(receiver, function, &args)
    } else {
        lib.call(function, &args)
    };
    let result = outcome.map_err(|e| CliError::failure(format!("Error: {e}")))?;

    if options.json {
        serde_json::to_string(&render_json(result))
            .map_err(|e| CliError::failure(format!("Error serializing result: {e}")))
    } else {
        Ok(render_text(result))
    }
}

/// Render a result as text: one line per value, tuples flattened.
///
/// ## Notes
/// - An iterator is drained; each match prints on its own line with captures separated by tabs.
pub fn render_text(result: Value) -> String {
    let mut lines = Vec::new();
    for value in result.into_values() {
        match value {
            Value::Iterator(matches) => {
                for captures in matches {
                    lines.push(Value::Tuple(captures).to_string());
                }
            }
            other => lines.push(other.to_string()),
        }
    }
    lines.join("\n")
}

/// Render a result as a JSON array of its values.
pub fn render_json(result: Value) -> serde_json::Value {
    serde_json::Value::Array(result.into_values().into_iter().map(value_to_json).collect())
}

fn value_to_json(value: Value) -> serde_json::Value {
    match value {
        Value::Nil => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(b),
        Value::Number(n) => number_to_json(n),
        Value::String(s) => serde_json::Value::String(s.to_string_lossy()),
        Value::Tuple(values) => serde_json::Value::Array(values.into_iter().map(value_to_json).collect()),
        Value::Iterator(matches) => serde_json::Value::Array(
            matches
                .map(|captures| serde_json::Value::Array(captures.into_iter().map(value_to_json).collect()))
                .collect(),
        ),
    }
}

/// Integral numbers serialize without a fraction; NaN and infinities become strings.
fn number_to_json(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() < 9.007_199_254_740_992e15 {
        return serde_json::Value::from(n as i64);
    }
    serde_json::Number::from_f64(n)
        .map(serde_json::Value::Number)
        .unwrap_or_else(|| serde_json::Value::String(format_number(n)))
}

/// Render the function registry: each signature followed by its indented description.
pub fn list_functions() -> String {
    StringLib::functions()
        .iter()
        .map(|info| {
            let marker = match info.origin {
                Origin::Lua => "",
                Origin::Extension => " [extension]",
            };
            format!("{}{marker}\n    {}", info.signature(), info.description)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
