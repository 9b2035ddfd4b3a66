//! Text formatters for scalar analysis values.
//!
//! All formatters are total: a value of the wrong shape still produces a
//! string, with integer coercion failures rendered as `NaN`.

use serde_json::Value;

use crate::consts::NOT_A_NUMBER;

/// How a text-registry entry turns its parsed value into a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Formatter {
    Percentage,
    Coordinate,
    YesNo,
    Integer,
}

impl Formatter {
    pub fn apply(self, value: &Value) -> String {
        match self {
            Self::Percentage => format_percentage(value),
            Self::Coordinate => format_coordinate(value),
            Self::YesNo => format_yes_no(value),
            Self::Integer => format_integer(value),
        }
    }
}

/// `42.9` -> `"42%"`. Truncates, never rounds.
pub fn format_percentage(value: &Value) -> String {
    format!("{}%", integer_text(Some(value)))
}

/// `[[12.7, 30.2], ...]` -> `"(12, 30)"`, using only the first pair.
pub fn format_coordinate(value: &Value) -> String {
    let first = value.get(0);
    let x = first.and_then(|p| p.get(0));
    let y = first.and_then(|p| p.get(1));
    format!("({}, {})", integer_text(x), integer_text(y))
}

pub fn format_yes_no(value: &Value) -> String {
    if is_truthy(value) { "Yes" } else { "No" }.to_string()
}

pub fn format_integer(value: &Value) -> String {
    integer_text(Some(value))
}

/// Display text for a value that has no formatter.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Score in `[0, 1]` as a truncated percentage: `0.8` -> `"80%"`.
pub fn format_score(score: f64) -> String {
    format_percentage(&Value::from(score * 100.0))
}

fn integer_text(value: Option<&Value>) -> String {
    value
        .and_then(coerce_integer)
        .map(integral_text)
        .unwrap_or_else(|| NOT_A_NUMBER.to_string())
}

/// Integral values inside the `i64` range print as integers; larger
/// magnitudes keep their full digits.
fn integral_text(value: f64) -> String {
    if value.abs() < i64::MAX as f64 {
        (value as i64).to_string()
    } else {
        format!("{value}")
    }
}

/// Integer coercion with parse-int semantics, as a truncated `f64`.
///
/// Numbers truncate toward zero. Strings yield their leading signed
/// integer prefix. Arrays coerce through their comma-joined text, so
/// `[7, 8]` gives 7. Everything else fails.
pub fn coerce_integer(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).map(f64::trunc),
        Value::String(s) => parse_integer_prefix(s),
        Value::Array(_) => parse_integer_prefix(&joined_text(value)),
        _ => None,
    }
}

fn parse_integer_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: f64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn joined_text(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(joined_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
