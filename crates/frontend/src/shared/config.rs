//! Application configuration provided through context.

use crate::shared::api_utils::api_base;
use contracts::shared::lookup::LookupConfig;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// e.g. "http://localhost:3000/api", no trailing slash
    pub api_base: String,
    pub lookup: LookupConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_base: api_base(),
            lookup: LookupConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Configuration from context, falling back to the environment defaults.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
