//! Response envelope used by the lookup endpoints: `{ success, data }`.
//!
//! `data` may be an array, an object or missing, and some endpoints answer
//! with a bare array. Lookups treat anything they cannot read as "no rows".

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Value,
}

/// Extract a list of rows from a lookup response body.
/// Rows that fail to decode are skipped.
pub fn list_from_value<T: DeserializeOwned>(body: Value) -> Vec<T> {
    let rows = match body {
        Value::Array(rows) => rows,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(rows)) => rows,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };
    rows.into_iter()
        .filter_map(|row| serde_json::from_value(row).ok())
        .collect()
}

/// Extract a single record: `{ success, data: {...} }` or the bare object.
pub fn item_from_value<T: DeserializeOwned>(body: Value) -> Result<T, String> {
    let record = match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(data @ Value::Object(_)) => data,
            Some(_) | None if map.contains_key("success") => {
                return Err("response carries no record".to_string())
            }
            _ => Value::Object(map),
        },
        _ => return Err("response is not an object".to_string()),
    };
    serde_json::from_value(record).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        code: String,
    }

    #[test]
    fn test_envelope_with_array() {
        let rows: Vec<Row> = list_from_value(json!({"success": true, "data": [{"code": "IN"}]}));
        assert_eq!(rows, vec![Row { code: "IN".into() }]);
    }

    #[test]
    fn test_bare_array() {
        let rows: Vec<Row> = list_from_value(json!([{"code": "AE"}, {"code": "US"}]));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_missing_or_odd_data_is_empty() {
        assert!(list_from_value::<Row>(json!({"success": false})).is_empty());
        assert!(list_from_value::<Row>(json!({"success": true, "data": {"code": "IN"}})).is_empty());
        assert!(list_from_value::<Row>(json!(null)).is_empty());
    }

    #[test]
    fn test_single_record() {
        let row: Row = item_from_value(json!({"success": true, "data": {"code": "IN"}})).unwrap();
        assert_eq!(row.code, "IN");
        let row: Row = item_from_value(json!({"code": "AE"})).unwrap();
        assert_eq!(row.code, "AE");
        assert!(item_from_value::<Row>(json!({"success": false, "message": "x"})).is_err());
        assert!(item_from_value::<Row>(json!([])).is_err());
    }

    #[test]
    fn test_bad_rows_are_skipped() {
        let rows: Vec<Row> = list_from_value(json!({"data": [{"code": "IN"}, {"name": "x"}]}));
        assert_eq!(rows.len(), 1);
    }
}
