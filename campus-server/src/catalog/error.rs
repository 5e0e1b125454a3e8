//! Catalog loading error types.

use crate::domain::{DomainError, LocationId, RouteId};

/// Errors that can occur when loading the route/location catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog document is not valid JSON for the expected shape
    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record has a malformed field
    #[error("invalid {record}: {message}")]
    InvalidRecord { record: String, message: String },

    /// A route failed validation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Two routes share an id
    #[error("duplicate route id: {0}")]
    DuplicateRoute(RouteId),

    /// Two locations share an id
    #[error("duplicate location id: {0}")]
    DuplicateLocation(LocationId),
}
