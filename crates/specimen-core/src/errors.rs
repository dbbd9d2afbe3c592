//! Cross-cutting error types for Specimen.
//!
//! Building the fixture never fails. Errors arise when a value is turned into
//! one of the inspection views, or from the project registry and its file.
//! A unified error is deferred to `specimen-cli`, which wraps everything in
//! `anyhow`.

use thiserror::Error;

/// Errors raised by the inspection views and the project registry.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A named field does not exist on the inspected value.
    #[error("Field not found: {owner}.{field}")]
    NotFound { owner: String, field: String },

    /// The nesting guard must allow at least the root value.
    #[error("Invalid max depth {max_depth}: must be at least 1")]
    InvalidDepth { max_depth: u32 },

    /// A project path is not an existing directory.
    #[error("Invalid project path '{path}': not an existing directory")]
    InvalidPath { path: String },

    /// Reading or writing a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The value could not be converted to or from JSON.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
