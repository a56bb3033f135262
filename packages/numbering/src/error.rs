//! Error types for catalog checking.
//!
//! Problems found *in* a catalog are values ([`ParseFailure`],
//! [`StructuralError`]) collected into the report. `CatalogError` is only for
//! failures that stop a run, such as an unreadable input file.
//!
//! [`ParseFailure`]: crate::numbering::ParseFailure
//! [`StructuralError`]: crate::numbering::StructuralError

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the catalog checker.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Input format could not be determined or is not supported.
    #[error("Unsupported input format: '{0}'. Expected one of: json, yaml, yml")]
    UnsupportedFormat(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error("JSON processing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization failed.
    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// The catalog contains numbering errors and strict mode is on.
    #[error("Catalog check failed with {count} error(s)")]
    CheckFailed { count: usize },
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
