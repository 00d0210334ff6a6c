use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage read error: {0}")]
    ReadError(String),

    #[error("storage write error: {0}")]
    WriteError(String),

    #[error("storage encoding error: {0}")]
    EncodingError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum WebchatError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webhook error: {0}")]
    Webhook(String),
}
