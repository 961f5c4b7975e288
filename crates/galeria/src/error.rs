//! Error types for the Galeria library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Galeria operations.
#[derive(Debug, Error)]
pub enum GaleriaError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input rejected before any mutation took place.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An artist cannot be deleted while artworks still reference it.
    #[error("Cannot delete artist '{artist_id}' with {count} associated artwork(s)")]
    DependencyExists { artist_id: String, count: usize },

    /// A referenced or targeted record does not exist.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    /// Saving or loading a gallery document failed.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the CSV writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl GaleriaError {
    pub(crate) fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        GaleriaError::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Whether this error was raised by input checks rather than I/O.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            GaleriaError::Validation(_)
                | GaleriaError::DependencyExists { .. }
                | GaleriaError::NotFound { .. }
        )
    }
}

/// Result type alias for Galeria operations.
pub type Result<T> = std::result::Result<T, GaleriaError>;
