//! Settings structures for Placefinder configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure matching placefinder's settings.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub search: SearchSettings,
    pub outgoing: OutgoingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            search: SearchSettings::default(),
            outgoing: OutgoingSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge environment variables into settings
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("PLACEFINDER_API_KEY") {
            self.api.key = val;
        }
        if let Ok(val) = std::env::var("PLACEFINDER_BASE_URL") {
            self.api.base_url = val;
        }
        if let Ok(val) = std::env::var("PLACEFINDER_DEBOUNCE_SECS") {
            if let Ok(secs) = val.parse() {
                self.search.debounce_secs = secs;
            }
        }
        if let Ok(val) = std::env::var("PLACEFINDER_REQUEST_TIMEOUT") {
            if let Ok(secs) = val.parse() {
                self.outgoing.request_timeout = secs;
            }
        }
    }
}

/// Geocoding provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the geocoding provider
    pub base_url: String,
    /// API credential sent with every request
    pub key: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.opencagedata.com".to_string(),
            key: String::new(),
        }
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Quiescence window before a query is sent, in seconds
    pub debounce_secs: f64,
    /// Shortest query the provider will geocode, in characters
    pub min_query_len: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_secs: crate::DEFAULT_DEBOUNCE_SECS,
            min_query_len: crate::MIN_QUERY_LEN,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, "https://api.opencagedata.com");
        assert!(settings.api.key.is_empty());
        assert_eq!(settings.search.debounce_secs, 1.0);
        assert_eq!(settings.search.min_query_len, 2);
        assert_eq!(settings.outgoing.request_timeout, 5.0);
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let yaml = r#"
api:
  key: "test-key"
search:
  debounce_secs: 0.5
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.api.key, "test-key");
        assert_eq!(settings.api.base_url, "https://api.opencagedata.com");
        assert_eq!(settings.search.debounce_secs, 0.5);
        assert_eq!(settings.search.min_query_len, 2);
    }
}
