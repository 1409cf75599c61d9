use crate::shared::lookup::LookupItem;
use serde::{Deserialize, Serialize};

/// Which port directory a lookup searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDirectory {
    /// Foreign ports of discharge / destination (`/ports`)
    World,
    Sea,
    Air,
}

impl PortDirectory {
    pub fn endpoint(self) -> &'static str {
        match self {
            PortDirectory::World => "ports",
            PortDirectory::Sea => "seaPorts",
            PortDirectory::Air => "airPorts",
        }
    }

    /// Port directory matching the shipment's transport mode.
    pub fn for_transport_mode(mode: &str) -> Self {
        if mode.eq_ignore_ascii_case("AIR") {
            PortDirectory::Air
        } else {
            PortDirectory::Sea
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Port {
    #[serde(rename = "portCode", default)]
    pub port_code: String,

    #[serde(rename = "portName", default)]
    pub port_name: String,

    #[serde(rename = "uneceCode", default)]
    pub unece_code: String,

    #[serde(default)]
    pub country: String,
}

impl Port {
    /// Country to cascade into the shipment when this port is picked.
    pub fn country_hint(&self) -> Option<String> {
        let country = self.country.trim();
        (!country.is_empty()).then(|| country.to_uppercase())
    }
}

impl LookupItem for Port {
    fn search_label(&self) -> String {
        format!("{} {} {}", self.port_code, self.port_name, self.unece_code)
    }

    fn display_value(&self) -> String {
        format!("{} - {}", self.port_code, self.port_name.to_uppercase())
    }

    fn hint(&self) -> Option<String> {
        self.country_hint()
    }
}

/// Indian gateway port (`/gateway-ports`), identified by its UNECE code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GatewayPort {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub unece_code: String,

    #[serde(default)]
    pub port_type: String,

    #[serde(default)]
    pub location: String,
}

impl LookupItem for GatewayPort {
    fn search_label(&self) -> String {
        format!("{} {}", self.unece_code, self.name)
    }

    fn display_value(&self) -> String {
        format!("{} - {}", self.unece_code, self.name.to_uppercase())
    }

    fn hint(&self) -> Option<String> {
        (!self.port_type.is_empty()).then(|| self.port_type.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_display_and_country() {
        let port: Port = serde_json::from_str(
            r#"{"portCode": "AEJEA", "portName": "Jebel Ali", "country": "United Arab Emirates"}"#,
        )
        .unwrap();
        assert_eq!(port.display_value(), "AEJEA - JEBEL ALI");
        assert_eq!(port.country_hint().as_deref(), Some("UNITED ARAB EMIRATES"));

        let bare = Port::default();
        assert_eq!(bare.country_hint(), None);
    }

    #[test]
    fn test_directory_for_mode() {
        assert_eq!(PortDirectory::for_transport_mode("air"), PortDirectory::Air);
        assert_eq!(PortDirectory::for_transport_mode("SEA"), PortDirectory::Sea);
        assert_eq!(PortDirectory::World.endpoint(), "ports");
    }
}
