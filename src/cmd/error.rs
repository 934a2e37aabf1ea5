use crate::sdk::PluginError;
use thiserror::Error;

pub type CmdResult<T> = Result<T, CmdError>;

#[derive(Debug, Error)]
pub enum CmdError {
    #[error("Invalid field '{0}', expected NAME=VALUE")]
    InvalidField(String),
    #[error(transparent)]
    Plugin(#[from] PluginError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),
    #[error("Failed to read env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
    #[error("Failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to render YAML output: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
