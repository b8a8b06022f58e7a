//! Parse command-line arguments into library values.
//!
//! ## Notes
//! - `nil`, `true` and `false` are keywords; quote them (`'nil'`) to pass the text.
//! - Decimal numbers (including exponents) become numbers. `inf` and `nan` stay strings.
//! - Anything else is passed as a string, unquoted.

use lunar_stdlib::Value;

/// Parse a single argument.
///
/// ## Examples
/// ```rust
/// use lunar::cli::literal::parse_arg;
/// use lunar_stdlib::Value;
///
/// assert_eq!(parse_arg("-6"), Value::Number(-6.0));
/// assert_eq!(parse_arg("'42'"), Value::from("42"));
/// assert_eq!(parse_arg("nil"), Value::Nil);
/// ```
pub fn parse_arg(raw: &str) -> Value {
    match raw {
        "nil" => return Value::Nil,
        "true" => return Value::Boolean(true),
        "false" => return Value::Boolean(false),
        _ => {}
    }
    if let Some(inner) = unquote(raw) {
        return Value::from(inner);
    }
    if let Some(n) = parse_number(raw) {
        return Value::Number(n);
    }
    Value::from(raw)
}

/// Parse every argument in order.
pub fn parse_args(raw: &[String]) -> Vec<Value> {
    raw.iter().map(|arg| parse_arg(arg)).collect()
}

fn unquote(raw: &str) -> Option<&str> {
    ['\'', '"']
        .into_iter()
        .find_map(|quote| raw.strip_prefix(quote)?.strip_suffix(quote))
}

fn parse_number(raw: &str) -> Option<f64> {
    let numeric = !raw.is_empty()
        && raw
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !numeric {
        return None;
    }
    raw.parse().ok()
}
