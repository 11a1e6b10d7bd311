// src/config.rs
use std::env;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_API_PATH: &str = "/api/ai/chat";
pub const DEFAULT_TITLE: &str = "AI Chat";
pub const DEFAULT_BUTTON_ICON: &str = "💬";

/// Settings for the chat client and the widget around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub api_path: String,
    pub title: String,
    pub button_icon: String,
    pub start_open: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_path: DEFAULT_API_PATH.to_string(),
            title: DEFAULT_TITLE.to_string(),
            button_icon: DEFAULT_BUTTON_ICON.to_string(),
            start_open: false,
        }
    }
}

impl Config {
    /// Load from the process environment, picking up a `.env` file if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("CHAT_API_BASE_URL") {
            config.base_url = value;
        }
        if let Some(value) = lookup("CHAT_API_PATH") {
            config.api_path = value;
        }
        if let Some(value) = lookup("CHAT_TITLE") {
            config.title = value;
        }
        if let Some(value) = lookup("CHAT_BUTTON_ICON") {
            config.button_icon = value;
        }
        if let Some(value) = lookup("CHAT_START_OPEN") {
            config.start_open = parse_bool("CHAT_START_OPEN", &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(ConfigError::Empty { var: "CHAT_API_BASE_URL" });
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::BaseUrl {
                var: "CHAT_API_BASE_URL",
                value: self.base_url.clone(),
            });
        }
        if !self.api_path.starts_with('/') {
            return Err(ConfigError::RelativePath {
                var: "CHAT_API_PATH",
                value: self.api_path.clone(),
            });
        }
        if self.title.trim().is_empty() {
            return Err(ConfigError::Empty { var: "CHAT_TITLE" });
        }
        Ok(())
    }

    /// Absolute URL the chat requests are posted to.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim().trim_end_matches('/'), self.api_path)
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Bool {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.endpoint(), "http://localhost:8080/api/ai/chat");
    }

    #[test]
    fn overrides_from_lookup() {
        let config = Config::from_lookup(lookup(&[
            ("CHAT_API_BASE_URL", "https://chat.example.com/"),
            ("CHAT_TITLE", "Customer Support"),
            ("CHAT_START_OPEN", "yes"),
        ]))
        .unwrap();
        assert_eq!(config.title, "Customer Support");
        assert!(config.start_open);
        assert_eq!(config.endpoint(), "https://chat.example.com/api/ai/chat");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_lookup(lookup(&[("CHAT_START_OPEN", "maybe")])),
            Err(ConfigError::Bool { .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("CHAT_API_PATH", "api/ai/chat")])),
            Err(ConfigError::RelativePath { .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("CHAT_API_BASE_URL", "localhost:8080")])),
            Err(ConfigError::BaseUrl { .. })
        ));
    }
}
