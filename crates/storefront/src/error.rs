//! Unified error handling for the storefront core.
//!
//! Provides a single `AppError` for embedders composing the storefront
//! pieces. The modules themselves return their own error types; `AppError`
//! exists so a caller can hold one failure type across them.

use thiserror::Error;

use crate::cart::StorageError;
use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Application-level error type for the storefront core.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading or validation failed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog fetch failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Storage backend operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
