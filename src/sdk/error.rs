use thiserror::Error;

pub type PluginResult<T> = Result<T, PluginError>;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Unable to determine home directory")]
    MissingHomeDir,
    #[error("Unknown field '{0}'")]
    UnknownField(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Failed to encode or decode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
