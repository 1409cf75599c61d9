use crate::shared::lookup::LookupItem;
use serde::{Deserialize, Serialize};

/// ICES district code row (`/districts`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct District {
    #[serde(rename = "districtCode", default)]
    pub district_code: String,

    #[serde(rename = "districtName", default)]
    pub district_name: String,

    #[serde(rename = "stateCode", default)]
    pub state_code: String,

    #[serde(rename = "stateName", default)]
    pub state_name: String,
}

impl District {
    /// State written to the sibling state field when this district is picked.
    /// Only a state name is used; a bare state code is not resolved.
    pub fn parent_state(&self) -> Option<String> {
        let name = self.state_name.trim();
        (!name.is_empty()).then(|| name.to_uppercase())
    }
}

impl LookupItem for District {
    fn search_label(&self) -> String {
        format!("{} {}", self.district_code, self.district_name)
    }

    fn display_value(&self) -> String {
        format!("{} - {}", self.district_code, self.district_name.to_uppercase())
    }

    fn hint(&self) -> Option<String> {
        self.parent_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parent_state() {
        let d = District {
            district_code: "437".into(),
            district_name: "Ahmedabad".into(),
            state_code: "24".into(),
            state_name: "Gujarat".into(),
        };
        assert_eq!(d.display_value(), "437 - AHMEDABAD");
        assert_eq!(d.parent_state().as_deref(), Some("GUJARAT"));
    }

    #[test]
    fn test_no_state_name_means_no_cascade() {
        let d = District {
            state_code: "24".into(),
            ..Default::default()
        };
        assert_eq!(d.parent_state(), None);
    }
}
