//! App Configuration
//!
//! Optional settings read from `<meta name="recipe-book-config" content='{...}'>`
//! in index.html. Missing or malformed config falls back to defaults.

use serde::Deserialize;
use wasm_bindgen::JsCast;

/// Name attribute of the config meta tag
pub const CONFIG_META_NAME: &str = "recipe-book-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Heading shown above the form
    pub title: String,
    /// One of error, warn, info, debug, trace, off
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Recipe Book".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse config JSON. Unknown keys are ignored, absent keys take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from the document's meta tag, falling back to defaults
    pub fn load() -> Self {
        let Some(content) = read_meta_content() else {
            return Self::default();
        };
        match Self::from_json(&content) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[CONFIG] ignoring malformed {}: {}", CONFIG_META_NAME, e);
                Self::default()
            }
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or_else(|_| {
            log::warn!("[CONFIG] unknown log level {:?}, using info", self.log_level);
            log::LevelFilter::Info
        })
    }
}

fn read_meta_content() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", CONFIG_META_NAME);
    let element = document.query_selector(&selector).ok()??;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    Some(meta.content())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.title, "Recipe Book");
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"log_level": "debug"}"#).unwrap();
        assert_eq!(config.title, "Recipe Book");
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_full_json() {
        let config = AppConfig::from_json(r#"{"title": "Grandma's Book", "log_level": "OFF"}"#).unwrap();
        assert_eq!(config.title, "Grandma's Book");
        assert_eq!(config.level_filter(), log::LevelFilter::Off);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(AppConfig::from_json("title=Recipes").is_err());
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
