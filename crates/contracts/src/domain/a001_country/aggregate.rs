use crate::shared::lookup::LookupItem;
use serde::{Deserialize, Serialize};

/// Country row of the `/countries` directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Country {
    #[serde(rename = "countryCode", default)]
    pub country_code: String,

    #[serde(rename = "countryName", alias = "country_name", default)]
    pub country_name: String,
}

impl LookupItem for Country {
    fn search_label(&self) -> String {
        format!("{} {}", self.country_code, self.country_name)
    }

    fn display_value(&self) -> String {
        self.country_name.to_uppercase()
    }

    fn hint(&self) -> Option<String> {
        (!self.country_code.is_empty()).then(|| format!("({})", self.country_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_snake_case_name() {
        let c: Country =
            serde_json::from_str(r#"{"countryCode": "AE", "country_name": "United Arab Emirates"}"#)
                .unwrap();
        assert_eq!(c.display_value(), "UNITED ARAB EMIRATES");
        assert_eq!(c.search_label(), "AE United Arab Emirates");
        assert_eq!(c.hint().as_deref(), Some("(AE)"));
    }
}
