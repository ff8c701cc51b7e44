//! Lenient decoders for the loosely typed fields the backend emits.
//!
//! The backend mixes integer and string ids, sends budgets as numbers or
//! numeric strings, and omits fields freely. These helpers are used through
//! `#[serde(deserialize_with = ...)]` so the typed structs stay strict.

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Render a JSON scalar as a stable list key.
///
/// Integers (and floats with no fractional part) print without a decimal
/// point, strings pass through, `null` becomes the empty string.
pub fn value_to_id(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => number_to_id(n),
        other => other.to_string(),
    }
}

fn number_to_id(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => (f as i64).to_string(),
        _ => n.to_string(),
    }
}

/// Integer prefix of a string, the way a browser's `parseInt` reads it.
///
/// # Examples
/// ```
/// use contracts::shared::wire::parse_int_prefix;
/// assert_eq!(parse_int_prefix("500000"), Some(500000));
/// assert_eq!(parse_int_prefix(" 12.9 lakh"), Some(12));
/// assert_eq!(parse_int_prefix("-7"), Some(-7));
/// assert_eq!(parse_int_prefix("abc"), None);
/// ```
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|v| v * sign)
}

/// Integer view of a JSON value: numbers are truncated, strings are read
/// with [`parse_int_prefix`], anything else has no integer value.
pub fn value_to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => parse_int_prefix(s),
        _ => None,
    }
}

/// Float view of a JSON value; numeric strings are accepted.
pub fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Parse a form string into a JSON number.
///
/// Blank input has no number. Integral values stay integers so that `"28"`
/// serializes as `28` rather than `28.0`.
pub fn parse_number(s: &str) -> Option<Number> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Some(Number::from(i));
    }
    let f = s.parse::<f64>().ok().filter(|f| f.is_finite())?;
    if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        return Some(Number::from(f as i64));
    }
    Number::from_f64(f)
}

pub fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(value_to_id).unwrap_or_default())
}

pub fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_null()).map(|v| value_to_id(&v)))
}

pub fn de_opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_int))
}

pub fn de_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64).unwrap_or_default())
}

pub fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64))
}

/// Accepts a string or `null`; other scalars are rendered as text.
pub fn de_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(value_to_id).unwrap_or_default())
}

/// Like [`de_string`], but `null` or a missing field stays `None`.
pub fn de_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    de_opt_id(deserializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_to_id() {
        assert_eq!(value_to_id(&json!(1)), "1");
        assert_eq!(value_to_id(&json!("17")), "17");
        assert_eq!(value_to_id(&json!(4.0)), "4");
        assert_eq!(value_to_id(&json!(4.5)), "4.5");
        assert_eq!(value_to_id(&Value::Null), "");
    }

    #[test]
    fn test_value_to_int() {
        assert_eq!(value_to_int(&json!(500000)), Some(500000));
        assert_eq!(value_to_int(&json!(500000.9)), Some(500000));
        assert_eq!(value_to_int(&json!("500000")), Some(500000));
        assert_eq!(value_to_int(&json!("n/a")), None);
        assert_eq!(value_to_int(&json!(null)), None);
        assert_eq!(value_to_int(&json!(true)), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("28"), Some(Number::from(28)));
        assert_eq!(parse_number(" 28 "), Some(Number::from(28)));
        assert_eq!(parse_number("28.0"), Some(Number::from(28)));
        assert_eq!(parse_number("4500.5"), Number::from_f64(4500.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("twenty"), None);
    }
}
