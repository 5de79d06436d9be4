use crate::config::Config;
use crate::display::{print_info, print_success};
use crate::errors::{LrError, Result};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Get configuration value
    Get {
        /// Configuration key (section.key, e.g. api.base_url)
        key: String,
    },
    /// Set configuration value
    Set {
        /// Configuration key (section.key, e.g. api.base_url)
        key: String,
        /// Configuration value
        value: String,
    },
    /// Remove configuration value
    Unset {
        /// Configuration key (section.key)
        key: String,
    },
}

fn split_key(key: &str) -> Result<(&str, &str)> {
    key.split_once('.').ok_or_else(|| {
        LrError::InvalidInput(format!(
            "Invalid config key '{}'; expected section.key (e.g. api.base_url)",
            key
        ))
    })
}

// Counts characters, not bytes: config values can carry multi-byte UTF-8.
fn masked(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "****".to_string()
    }
}

pub fn handle_config(action: ConfigCommands) -> Result<()> {
    let mut config = Config::new()?;

    match action {
        ConfigCommands::Show => {
            print_info(&format!("Config file: {}", config.config_path().display()));
            match config.api_key() {
                Some(key) => println!("api.key:      {}", masked(&key)),
                None => println!("api.key:      (not set)"),
            }
            match config.api_secret() {
                Some(secret) => println!("api.secret:   {}", masked(&secret)),
                None => println!("api.secret:   (not set)"),
            }
            match config.base_url() {
                Some(url) => println!("api.base_url: {}", url),
                None => println!("api.base_url: (default)"),
            }
            Ok(())
        }
        ConfigCommands::Get { key } => {
            let (section, name) = split_key(&key)?;
            match config.get_value(section, name) {
                Some(value) => println!("{}", value),
                None => println!("(not set)"),
            }
            Ok(())
        }
        ConfigCommands::Set { key, value } => {
            let (section, name) = split_key(&key)?;
            config.set_value(section, name, &value);
            config.save()?;
            print_success(&format!("Set {}", key));
            Ok(())
        }
        ConfigCommands::Unset { key } => {
            let (section, name) = split_key(&key)?;
            config.unset_value(section, name);
            config.save()?;
            print_success(&format!("Unset {}", key));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_key() {
        assert_eq!(split_key("api.base_url").unwrap(), ("api", "base_url"));
        assert!(split_key("nodots").is_err());
    }

    #[test]
    fn test_masked_multibyte_secret() {
        assert_eq!(masked("sälä1234sälä"), "sälä...sälä");
        assert_eq!(masked("sälä"), "****");
    }
}
