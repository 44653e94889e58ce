//! Error types for tint-core

use thiserror::Error;

/// Result type alias using the library's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for tint-core
#[derive(Error, Debug)]
pub enum Error {
    /// Persistence errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Palette export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Clipboard errors
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the key-value store boundary.
///
/// Corrupt data is deliberately absent here: a value that fails to
/// deserialize is treated as missing at the call site, not raised.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {0}: {1}")]
    ReadFailed(String, String),

    #[error("failed to write {0}: {1}")]
    WriteFailed(String, String),

    #[error("failed to serialize value for key '{0}': {1}")]
    SerializeFailed(String, String),
}

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {0}: {1}")]
    ReadFailed(String, String),

    #[error("failed to parse config: {0}")]
    ParseFailed(String),

    #[error("no data directory could be resolved")]
    NoDataDir,
}

/// Palette export errors.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to serialize export document: {0}")]
    SerializeFailed(String),

    #[error("failed to write {0}: {1}")]
    WriteFailed(String, String),
}

/// Clipboard write errors.
///
/// These never halt the tool; callers downgrade them to a warning notice.
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("failed to write escape sequence: {0}")]
    WriteFailed(String),
}
