use serde::{Deserialize, Serialize};

/// Tuning shared by every lookup field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Quiet period before a remote search is sent, in milliseconds.
    pub debounce_ms: u32,
    /// Delay between blur and closing the panel, so a pointer-down on an
    /// option still lands.
    pub blur_grace_ms: u32,
    /// Maximum number of suggestions rendered.
    pub result_limit: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 220,
            blur_grace_ms: 150,
            result_limit: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: LookupConfig = serde_json::from_str(r#"{"result_limit": 10}"#).unwrap();
        assert_eq!(config.result_limit, 10);
        assert_eq!(config.debounce_ms, 220);
        assert_eq!(config.blur_grace_ms, 150);
    }
}
