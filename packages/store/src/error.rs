use thiserror::Error;

/// Failure reported by a [`crate::KeyValueStore`] backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The platform storage could not be reached (e.g. `localStorage`
    /// disabled by the browser).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    #[error("storage lock poisoned")]
    Poisoned,

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend refused the operation (quota exceeded, security error, ...).
    #[error("storage backend error: {0}")]
    Backend(String),
}
