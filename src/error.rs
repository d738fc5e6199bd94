// SPDX-License-Identifier: MIT

//! Typed error handling for wheredb
//!
//! `QueryError` covers everything the `WHERE` parser can reject.
//! `StoreError` is the top-level type returned by loading and querying.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Top-level error type for wheredb
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record file does not exist
    #[error("Record file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Record file is not a JSON array of objects
    #[error("Invalid JSON in {}: {source}", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Rejected query; nothing was executed
    #[error("Invalid query: {0}")]
    Query(#[from] QueryError),

    /// Configuration errors (unreadable or invalid config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors raised while parsing a `WHERE` clause
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Missing `WHERE` keyword or no predicates after it
    #[error("{0}")]
    InvalidQuery(String),

    /// A predicate does not match `field operator value`
    #[error("Invalid condition format: {0}")]
    InvalidCondition(String),
}

impl StoreError {
    /// Create a not-found error for a record file
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Wrap a JSON parse failure with the file it came from
    pub fn malformed(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::MalformedInput {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl QueryError {
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery(message.into())
    }

    pub fn invalid_condition(message: impl Into<String>) -> Self {
        Self::InvalidCondition(message.into())
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, StoreError>;
