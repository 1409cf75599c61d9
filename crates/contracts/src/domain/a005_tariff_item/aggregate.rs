use crate::shared::lookup::{exact_pick, LookupItem};
use serde::{Deserialize, Serialize};

/// Minimum trimmed query length before the tariff search is called.
pub const MIN_SEARCH_LEN: usize = 2;

/// A pasted code that matches a row exactly is taken without a click.
pub fn exact_code_match(items: &[TariffItem], query: &str) -> Option<TariffItem> {
    exact_pick(items, query, |item| item.hs_code.as_str())
}

/// Export tariff (RITC / CTH) line from `/getCthsExport`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TariffItem {
    #[serde(default)]
    pub hs_code: String,

    #[serde(default)]
    pub item_description: String,

    #[serde(default)]
    pub unit: String,
}

impl LookupItem for TariffItem {
    fn search_label(&self) -> String {
        format!("{} {}", self.hs_code, self.item_description)
    }

    fn display_value(&self) -> String {
        self.hs_code.clone()
    }

    fn hint(&self) -> Option<String> {
        (!self.item_description.is_empty()).then(|| self.item_description.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::lookup::SearchPlan;

    #[test]
    fn test_exact_code() {
        let items = vec![
            TariffItem {
                hs_code: "52010011".into(),
                item_description: "Bengal deshi cotton".into(),
                unit: "KGS".into(),
            },
            TariffItem {
                hs_code: "52010012".into(),
                item_description: "Other cotton".into(),
                unit: "KGS".into(),
            },
        ];
        assert_eq!(exact_code_match(&items, "52010012"), Some(items[1].clone()));
        assert_eq!(exact_code_match(&items, "5201"), None);
        assert_eq!(exact_code_match(&items, ""), None);
        assert_eq!(items[0].display_value(), "52010011");
    }

    #[test]
    fn test_single_character_is_not_searched() {
        assert_eq!(SearchPlan::for_input("5", MIN_SEARCH_LEN), SearchPlan::Clear);
        assert!(matches!(
            SearchPlan::for_input("52", MIN_SEARCH_LEN),
            SearchPlan::Send { .. }
        ));
    }
}
