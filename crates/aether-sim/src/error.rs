use std::path::PathBuf;

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised by the live runtime.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The tick task needs a running tokio runtime.
    #[error("no tokio runtime available to drive the game clock")]
    NoRuntime,
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures inside a persistence adapter.
///
/// These never reach the engine: adapters log them and report "no saved
/// state" or skip the write.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("cannot access {path}: {source}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// The saved text is not valid JSON, or the state could not be encoded.
    #[error("invalid save data: {0}")]
    Json(#[from] serde_json::Error),

    /// The saved JSON is not an object.
    #[error("saved state is not a JSON object")]
    NotAnObject,
}
