//! Tolerant field decoders for backend payloads.
//!
//! The backend stores form values as they were typed, so numbers may arrive
//! as JSON numbers, numeric strings, empty strings or null.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse a user-entered numeric value; anything unparseable is 0.
pub fn parse_number(text: &str) -> f64 {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// Decode a number that may be encoded as a string.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => parse_number(&s),
        _ => 0.0,
    })
}

/// Decode a text value that may be encoded as a number.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "number")]
        qty: f64,
        #[serde(default, deserialize_with = "text")]
        per: String,
    }

    #[test]
    fn test_number_accepts_strings_and_nulls() {
        let row: Row = serde_json::from_str(r#"{"qty": "12.5", "per": 1}"#).unwrap();
        assert_eq!(row.qty, 12.5);
        assert_eq!(row.per, "1");

        let row: Row = serde_json::from_str(r#"{"qty": null, "per": null}"#).unwrap();
        assert_eq!(row.qty, 0.0);
        assert_eq!(row.per, "");

        let row: Row = serde_json::from_str(r#"{"qty": ""}"#).unwrap();
        assert_eq!(row.qty, 0.0);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 83.25 "), 83.25);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
    }
}
