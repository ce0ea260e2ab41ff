//! Lenient scalar decoding for catalog payloads.
//!
//! The catalog mixes JSON numbers and numeric strings for the same fields,
//! these helpers normalize both forms.

use serde::de::Deserializer;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(serde_json::Number),
    Text(String),
}

/// Decode any JSON value into an `i64` when it has an integral reading.
///
/// Numbers outside the `i64` range, fractional numbers, non-numeric strings
/// and non-scalar values yield `None` instead of an error.
pub(crate) fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(number) => integral(&number),
        serde_json::Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    })
}

fn integral(number: &serde_json::Number) -> Option<i64> {
    if let Some(value) = number.as_i64() {
        return Some(value);
    }
    let float = number.as_f64()?;
    // 2.0 is the same class as 2
    if float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64 {
        Some(float as i64)
    } else {
        None
    }
}

/// Decode a JSON number or string into its string form.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(number) => number.to_string(),
        NumberOrString::Text(text) => text,
    })
}

pub(crate) fn no_boost() -> String {
    super::NO_BOOST.to_string()
}
