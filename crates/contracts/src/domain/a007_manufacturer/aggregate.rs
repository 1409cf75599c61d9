use crate::shared::lookup::LookupItem;
use serde::{Deserialize, Serialize};

/// Manufacturer block of a product. `/dsr/manufacturers` returns the most
/// recent block per manufacturer name seen in earlier jobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Manufacturer {
    pub name: String,
    pub code: String,
    pub address: String,
    pub country: String,
    pub state_province: String,
    pub postal_code: String,
    pub source_state: String,
    pub transit_country: String,
}

impl LookupItem for Manufacturer {
    fn search_label(&self) -> String {
        format!("{} {}", self.name, self.code)
    }

    fn display_value(&self) -> String {
        self.name.to_uppercase()
    }

    fn hint(&self) -> Option<String> {
        (!self.code.is_empty()).then(|| self.code.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let m: Manufacturer = serde_json::from_str(r#"{"name": "Acme Textiles", "postalCode": "380015"}"#).unwrap();
        assert_eq!(m.postal_code, "380015");
        assert_eq!(m.code, "");
        assert_eq!(m.display_value(), "ACME TEXTILES");
    }
}
