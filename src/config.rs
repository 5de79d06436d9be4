use crate::errors::{ConfigError, LrError, Result};
use log::debug;
use loginradius_api::ApiConfig;
use std::fs;
use std::path::PathBuf;

/// Configuration manager for the `lr` CLI.
///
/// Credentials live in an ini file under the user config dir; environment
/// variables always win over file values so CI and one-off runs never need
/// the file.
#[derive(Debug, Clone)]
pub struct Config {
    config_path: PathBuf,
    data: ini::Ini,
}

fn get_config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("loginradius"))
}

impl Config {
    /// Load the config file, creating the directory on first use.
    pub fn new() -> Result<Self> {
        let config_dir = get_config_dir()?;
        let config_path = config_dir.join("config.ini");

        // Ensure config directory exists
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| ConfigError::DirectoryCreationFailed(e.to_string()))?;
        }

        let data = if config_path.exists() {
            debug!("Loading config from {}", config_path.display());
            ini::Ini::load_from_file(&config_path)
                .map_err(|e| ConfigError::IniError(e.to_string()))?
        } else {
            debug!("No config file yet at {}", config_path.display());
            ini::Ini::new()
        };

        Ok(Config { config_path, data })
    }

    /// Save the configuration to file
    pub fn save(&self) -> Result<()> {
        self.data
            .write_to_file(&self.config_path)
            .map_err(|e| ConfigError::IniError(e.to_string()))?;
        Ok(())
    }

    /// Get a configuration value
    pub fn get_value(&self, section: &str, key: &str) -> Option<String> {
        self.data
            .get_from(Some(section), key)
            .map(|s| s.to_string())
    }

    /// Set a configuration value
    pub fn set_value(&mut self, section: &str, key: &str, value: &str) {
        self.data.with_section(Some(section)).set(key, value);
    }

    /// Remove a configuration value
    pub fn unset_value(&mut self, section: &str, key: &str) {
        if let Some(section_map) = self.data.section_mut(Some(section)) {
            section_map.remove(key);
        }
    }

    /// API key: environment first, then the config file.
    pub fn api_key(&self) -> Option<String> {
        if let Ok(key) = std::env::var("LOGINRADIUS_API_KEY") {
            return Some(key);
        }
        self.get_value("api", "key")
    }

    pub fn set_api_key(&mut self, api_key: &str) {
        self.set_value("api", "key", api_key);
    }

    /// API secret: environment first, then the config file.
    pub fn api_secret(&self) -> Option<String> {
        if let Ok(secret) = std::env::var("LOGINRADIUS_API_SECRET") {
            return Some(secret);
        }
        self.get_value("api", "secret")
    }

    pub fn set_api_secret(&mut self, api_secret: &str) {
        self.set_value("api", "secret", api_secret);
    }

    /// Base URL override: environment first, then the config file.
    pub fn base_url(&self) -> Option<String> {
        if let Ok(url) = std::env::var("LOGINRADIUS_API_URL") {
            return Some(url);
        }
        self.get_value("api", "base_url")
    }

    pub fn set_base_url(&mut self, base_url: &str) {
        self.set_value("api", "base_url", base_url);
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }
}

impl ApiConfig for Config {
    type Error = LrError;

    fn get_api_key(&self) -> std::result::Result<String, LrError> {
        self.api_key().ok_or_else(|| {
            ConfigError::Missing(
                "API key not configured; run 'lr init' or set LOGINRADIUS_API_KEY".to_string(),
            )
            .into()
        })
    }

    fn get_api_secret(&self) -> std::result::Result<Option<String>, LrError> {
        Ok(self.api_secret())
    }

    fn get_base_url(&self) -> std::result::Result<Option<String>, LrError> {
        Ok(self.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_memory_config() -> Config {
        Config {
            config_path: PathBuf::from("/tmp/loginradius-test/config.ini"),
            data: ini::Ini::new(),
        }
    }

    #[test]
    fn test_set_get_unset_roundtrip() {
        let mut config = in_memory_config();
        assert_eq!(config.get_value("api", "key"), None);

        config.set_value("api", "key", "k-123");
        assert_eq!(config.get_value("api", "key"), Some("k-123".to_string()));

        config.unset_value("api", "key");
        assert_eq!(config.get_value("api", "key"), None);
    }

    #[test]
    fn test_typed_accessors_hit_api_section() {
        let mut config = in_memory_config();
        config.set_api_secret("s-456");
        config.set_base_url("https://api.example.com");

        assert_eq!(config.get_value("api", "secret"), Some("s-456".to_string()));
        assert_eq!(
            config.get_value("api", "base_url"),
            Some("https://api.example.com".to_string())
        );
    }
}
