//! Error types for the game library.

use thiserror::Error;

use crate::core::LayoutError;

/// Main error type for library operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from the store or a catalog/dictionary file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted document could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A target phrase is not usable.
    #[error("invalid target: {0}")]
    Layout(#[from] LayoutError),

    /// Guess and target have different letter counts.
    #[error("guess has {actual} letters, target has {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Level catalog failed validation.
    #[error("invalid level catalog: {message}")]
    InvalidCatalog { message: String },

    /// Player is not present in the catalog.
    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    /// Shared game id is not stored on this device.
    #[error("unknown custom game: {0}")]
    UnknownCustomGame(String),

    /// Logging could not be initialised.
    #[error("logging error: {message}")]
    Logging { message: String },
}

/// Result alias using the library error type.
pub type Result<T> = std::result::Result<T, Error>;
