//! # Connection Configuration
//!
//! Persistence for the two values everything else depends on (server URL and
//! API key) plus the theme mode. Both connection values start unset; until
//! the user supplies them the app routes to the first-run setup screen and no
//! feed loads.
//!
//! Config changes do not propagate implicitly: the onboarding/settings
//! handlers save the file and then explicitly reconstruct the gateway client
//! and feed synchronizer from the new values.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Theme preference for the GUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

/// Serializable connection configuration for persistence.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Base URL of the catalog server, stored without a trailing slash.
    pub server_url: Option<String>,
    /// Opaque API credential sent with every request.
    pub api_key: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl ConnectionConfig {
    /// Both values present and non-blank: the app may construct a gateway.
    pub fn is_complete(&self) -> bool {
        self.server_url.as_deref().is_some_and(|s| !s.trim().is_empty())
            && self.api_key.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    /// Record a new connection, normalizing the URL the way the server
    /// expects it (no trailing slash).
    pub fn set_connection(&mut self, server_url: &str, api_key: &str) {
        self.server_url = Some(server_url.trim().trim_end_matches('/').to_string());
        self.api_key = Some(api_key.trim().to_string());
    }

    /// Load configuration from a JSON file; a missing file yields defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: ConnectionConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Default config file location, next to the executable's working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("./reeldeck-config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_complete() {
        let mut config = ConnectionConfig::default();
        assert!(!config.is_complete());

        config.server_url = Some("http://media.local:9999".to_string());
        assert!(!config.is_complete());

        config.api_key = Some("secret".to_string());
        assert!(config.is_complete());

        config.api_key = Some("   ".to_string());
        assert!(!config.is_complete());
    }

    #[test]
    fn test_set_connection_normalizes_url() {
        let mut config = ConnectionConfig::default();
        config.set_connection("http://media.local:9999/ ", " secret ");
        assert_eq!(config.server_url.as_deref(), Some("http://media.local:9999"));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_theme_mode_round_trip() {
        let config = ConnectionConfig {
            server_url: Some("http://media.local".to_string()),
            api_key: Some("k".to_string()),
            theme_mode: ThemeMode::Dark,
        };
        let json = serde_json::to_string(&config).expect("serializable");
        assert!(json.contains("\"dark\""));
        let back: ConnectionConfig = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, config);
    }

    #[test]
    fn test_missing_theme_mode_defaults_to_system() {
        let back: ConnectionConfig =
            serde_json::from_str(r#"{"server_url":"http://x","api_key":"k"}"#)
                .expect("deserializable");
        assert_eq!(back.theme_mode, ThemeMode::System);
    }
}
