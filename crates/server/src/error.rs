use thiserror::Error;

/// Errors that can occur when bootstrapping the gathering rules server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// An I/O error (e.g. binding the listener).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The rule storage failed to load.
    #[error("storage error: {0}")]
    Storage(#[from] gathering_rules::StorageError),
}
