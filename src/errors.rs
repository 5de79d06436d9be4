use thiserror::Error;

#[derive(Error, Debug)]
pub enum LrError {
    #[error("API error: {0}")]
    Api(#[from] loginradius_api::ApiError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to create config directory: {0}")]
    DirectoryCreationFailed(String),

    #[error("Config file error: {0}")]
    IniError(String),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("{0}")]
    Missing(String),
}

pub type Result<T> = std::result::Result<T, LrError>;
