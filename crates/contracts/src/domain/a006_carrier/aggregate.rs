use crate::shared::lookup::LookupItem;
use serde::{Deserialize, Serialize};

/// IATA airline code row (`/airlines`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Airline {
    #[serde(rename = "alphanumericCode", default)]
    pub alphanumeric_code: String,

    #[serde(rename = "numericCode", default)]
    pub numeric_code: String,

    #[serde(rename = "airlineName", default)]
    pub airline_name: String,
}

impl LookupItem for Airline {
    fn search_label(&self) -> String {
        format!(
            "{} {} {}",
            self.alphanumeric_code, self.numeric_code, self.airline_name
        )
    }

    fn display_value(&self) -> String {
        format!("{} - {}", self.alphanumeric_code, self.airline_name.to_uppercase())
    }

    fn hint(&self) -> Option<String> {
        (!self.numeric_code.is_empty()).then(|| self.numeric_code.clone())
    }
}

/// Shipping line row (`/shippingLines`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ShippingLine {
    #[serde(rename = "shippingLineCode", default)]
    pub shipping_line_code: String,

    #[serde(rename = "shippingName", default)]
    pub shipping_name: String,

    #[serde(default)]
    pub location: String,
}

impl LookupItem for ShippingLine {
    fn search_label(&self) -> String {
        format!("{} {}", self.shipping_line_code, self.shipping_name)
    }

    fn display_value(&self) -> String {
        format!(
            "{} - {}",
            self.shipping_line_code,
            self.shipping_name.to_uppercase()
        )
    }

    fn hint(&self) -> Option<String> {
        (!self.location.is_empty()).then(|| self.location.clone())
    }
}
