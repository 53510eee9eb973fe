//! # Catalog Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds path and shape context              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in storefront) ← Serialized for the front-end               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Catalog lookup and loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No restaurant with this id.
    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),

    /// Catalog file could not be read or written.
    #[error("Cannot access catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON is malformed.
    #[error("Catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    /// Catalog parsed but breaks a shape rule (duplicate id, bad rating, ...).
    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

impl CatalogError {
    /// Wraps an I/O error with the file it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
