//! Numeric-safety helpers shared by the conversion and summary code.
//!
//! Values reach the pipeline from provider payloads and hand-filled report forms, so a number can
//! arrive as a JSON number, a numeric string, an empty string, junk text, or not at all. Everything
//! here collapses those shapes into `Option<f64>` holding only finite values.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A finite `f64`. Construction is the only place non-finite input is rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Finite(f64);

impl Finite {
    /// Wrap `value` if it is neither NaN nor infinite
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(value))
    }

    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Keep `value` only when it is finite
#[must_use]
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Round half-way cases towards positive infinity.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Format with one decimal, rounding half-way cases away from zero.
///
/// The magnitude is rounded and the sign put back, so `-0.25` gives `"-0.3"` and `9.25` gives
/// `"9.3"` where `{:.1}` would round to even.
#[must_use]
pub fn one_decimal(value: f64) -> String {
    let magnitude = round_half_up(value.abs() * 10.0) / 10.0;
    if value < 0.0 {
        format!("-{magnitude:.1}")
    } else {
        format!("{magnitude:.1}")
    }
}

/// Parse trimmed text as a finite number. Empty text is absent, not zero.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().and_then(finite)
}

/// Interpret a loosely typed JSON value as a finite number
#[must_use]
pub fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().and_then(finite),
        Value::String(text) => parse_number(text),
        _ => None,
    }
}

/// Interpret a loosely typed JSON value as an integral weather code.
///
/// Fractional codes do not belong to any provider range and are treated as absent.
#[must_use]
pub fn code_from_value(value: &Value) -> Option<i64> {
    let number = number_from_value(value)?;
    if number.fract() != 0.0 || number.abs() > i64::MAX as f64 {
        return None;
    }
    Some(number as i64)
}

/// Minimum and maximum of the finite values yielded by `values`.
#[must_use]
pub fn min_max<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}

/// Serde adapter: any JSON shape into a finite `Option<f64>`.
///
/// Use together with `#[serde(default)]` so a missing field is also absent.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

/// Serde adapter: any JSON shape into an integral `Option<i64>` weather code.
pub fn lenient_code<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(code_from_value))
}
