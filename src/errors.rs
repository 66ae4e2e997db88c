use thiserror::Error;

/// Infrastructure failures. Expected domain conditions (a reply without a
/// transaction, a bad period expression, a failed model call) have their own
/// tagged types in [`crate::extract`], [`crate::period`] and [`crate::model`]
/// and never travel through this enum.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
