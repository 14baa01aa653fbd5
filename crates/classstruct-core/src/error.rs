//! Error types for the ClassStruct shell

use thiserror::Error;

/// Main error type for shell bootstrap operations
#[derive(Error, Debug)]
pub enum ShellError {
    /// Route identifier is not part of the route table
    #[error("Unknown screen: {0}")]
    UnknownScreen(String),

    /// Config file could not be read
    #[error("Config IO error: {0}")]
    ConfigIo(#[source] std::io::Error),

    /// Config file is not valid JSON for `AppConfig`
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Config parsed but holds unusable values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Bundled hero image could not be read
    #[error("Asset IO error: {0}")]
    AssetIo(#[source] std::io::Error),

    /// Bundled hero image bytes are not a known image format
    #[error("Unrecognized image format: {0}")]
    UnrecognizedImage(String),

    /// Log filter directive failed to parse
    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber is already installed
    #[error("Logging init error: {0}")]
    LoggingInit(String),
}

/// Result type alias using ShellError
pub type ShellResult<T> = Result<T, ShellError>;
