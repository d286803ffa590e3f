//! Client Configuration
//!
//! Read once at startup from an optional inline JSON element in the host page:
//!
//! ```html
//! <script type="application/json" id="inventory-config">
//!   { "api_base": "http://localhost:5000/api/items", "log_level": "debug" }
//! </script>
//! ```

use log::LevelFilter;
use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "inventory-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Item collection endpoint
    pub api_base: String,
    /// Alert auto-dismiss delay
    pub alert_dismiss_ms: u32,
    /// `log` level name (error, warn, info, debug, trace, off)
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "/api/items".to_string(),
            alert_dismiss_ms: 4000,
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }

    /// Load from the host page; a missing element yields the defaults
    pub fn load() -> Result<Self, serde_json::Error> {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .unwrap_or_default();
        Self::from_json(&raw)
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = ClientConfig::from_json("  \n").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_base, "/api/items");
        assert_eq!(config.alert_dismiss_ms, 4000);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = ClientConfig::from_json(r#"{"api_base":"http://localhost:5000/api/items"}"#).unwrap();
        assert_eq!(config.api_base, "http://localhost:5000/api/items");
        assert_eq!(config.alert_dismiss_ms, 4000);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_log_level() {
        let config = ClientConfig::from_json(r#"{"log_level":"debug"}"#).unwrap();
        assert_eq!(config.level_filter(), LevelFilter::Debug);

        let bogus = ClientConfig::from_json(r#"{"log_level":"loud"}"#).unwrap();
        assert_eq!(bogus.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(ClientConfig::from_json("{ api_base: nope").is_err());
        assert!(ClientConfig::from_json(r#"{"alert_dismiss_ms":"soon"}"#).is_err());
    }
}
