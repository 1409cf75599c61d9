use crate::shared::lenient;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const BASE_CURRENCY: &str = "INR";

/// One currency line of a CBIC exchange-rate notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExchangeRate {
    #[serde(alias = "code", default)]
    pub currency_code: String,

    #[serde(default)]
    pub currency_name: String,

    /// Number of currency units the rates are quoted for (100 for JPY).
    #[serde(default, deserialize_with = "lenient::number")]
    pub unit: f64,

    #[serde(default, deserialize_with = "lenient::number")]
    pub import_rate: f64,

    #[serde(
        alias = "exportRate",
        alias = "rate",
        default,
        deserialize_with = "lenient::number"
    )]
    pub export_rate: f64,
}

impl ExchangeRate {
    /// Export rate for a single unit of the currency.
    pub fn per_unit(&self) -> f64 {
        let unit = if self.unit == 0.0 { 1.0 } else { self.unit };
        if unit < 0.0 || !self.export_rate.is_finite() {
            return 1.0;
        }
        self.export_rate / unit
    }
}

/// Rate notification effective for a date (`/currency-rates/by-date/{DD-MM-YYYY}`).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CurrencyRateDay {
    #[serde(default)]
    pub notification_number: String,

    #[serde(default)]
    pub effective_date: String,

    #[serde(default)]
    pub exchange_rates: Vec<ExchangeRate>,
}

/// Path segment used by the by-date endpoint.
pub fn rate_date_segment(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Read the rate lines from a by-date response. `data` may be the day
/// object itself or a list of days, newest first.
pub fn rates_from_response(body: Value) -> Vec<ExchangeRate> {
    let Value::Object(mut map) = body else {
        return Vec::new();
    };
    let success = map.get("success").and_then(Value::as_bool).unwrap_or(false);
    if !success {
        return Vec::new();
    }
    let day = match map.remove("data") {
        Some(Value::Array(mut days)) if !days.is_empty() => days.swap_remove(0),
        Some(day @ Value::Object(_)) => day,
        _ => return Vec::new(),
    };
    serde_json::from_value::<CurrencyRateDay>(day)
        .map(|d| d.exchange_rates)
        .unwrap_or_default()
}

/// Export rates loaded for the working date.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExchangeRateTable {
    rates: Vec<ExchangeRate>,
}

impl ExchangeRateTable {
    pub fn new(rates: Vec<ExchangeRate>) -> Self {
        Self { rates }
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn find(&self, code: &str) -> Option<&ExchangeRate> {
        let code = code.trim();
        self.rates
            .iter()
            .find(|r| r.currency_code.trim().eq_ignore_ascii_case(code))
    }

    /// INR per one unit of `code`. Unknown currencies convert 1:1.
    pub fn rate_for(&self, code: &str) -> f64 {
        let code = code.trim();
        if code.is_empty() || code.eq_ignore_ascii_case(BASE_CURRENCY) {
            return 1.0;
        }
        self.find(code).map(ExchangeRate::per_unit).unwrap_or(1.0)
    }

    pub fn to_inr(&self, amount: f64, code: &str) -> f64 {
        let total = amount * self.rate_for(code);
        if total.is_finite() {
            total
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> ExchangeRateTable {
        ExchangeRateTable::new(vec![
            ExchangeRate {
                currency_code: "USD".into(),
                unit: 1.0,
                export_rate: 83.0,
                ..Default::default()
            },
            ExchangeRate {
                currency_code: "JPY".into(),
                unit: 100.0,
                export_rate: 55.5,
                ..Default::default()
            },
        ])
    }

    #[test]
    fn test_rate_lookup() {
        let t = table();
        assert_eq!(t.rate_for("INR"), 1.0);
        assert_eq!(t.rate_for(""), 1.0);
        assert_eq!(t.rate_for("usd"), 83.0);
        assert_eq!(t.rate_for("JPY"), 0.555);
        assert_eq!(t.rate_for("GBP"), 1.0);
        assert_eq!(t.to_inr(100.0, "USD"), 8300.0);
    }

    #[test]
    fn test_zero_unit_treated_as_one() {
        let rate = ExchangeRate {
            currency_code: "EUR".into(),
            unit: 0.0,
            export_rate: 90.0,
            ..Default::default()
        };
        assert_eq!(rate.per_unit(), 90.0);
    }

    #[test]
    fn test_response_with_day_object() {
        let body = json!({
            "success": true,
            "data": {
                "effective_date": "01-10-2026",
                "exchange_rates": [
                    {"currency_code": "USD", "unit": 1, "export_rate": 83.1},
                    {"code": "EUR", "unit": "1", "exportRate": "90.5"}
                ]
            }
        });
        let rates = rates_from_response(body);
        assert_eq!(rates.len(), 2);
        assert_eq!(rates[1].currency_code, "EUR");
        assert_eq!(rates[1].export_rate, 90.5);
    }

    #[test]
    fn test_response_with_day_list_takes_first() {
        let body = json!({
            "success": true,
            "data": [
                {"exchange_rates": [{"currency_code": "USD", "export_rate": 84}]},
                {"exchange_rates": [{"currency_code": "USD", "export_rate": 80}]}
            ]
        });
        let rates = rates_from_response(body);
        assert_eq!(rates[0].export_rate, 84.0);
    }

    #[test]
    fn test_failed_response_is_empty() {
        assert!(rates_from_response(json!({"success": false, "data": {}})).is_empty());
        assert!(rates_from_response(json!([])).is_empty());
    }

    #[test]
    fn test_date_segment() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(rate_date_segment(date), "05-03-2026");
    }
}
