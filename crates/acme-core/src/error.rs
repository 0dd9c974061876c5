//! # Error Types
//!
//! Structured error hierarchy for the broker domain. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! - [`ValidationError`]: a request value violates a business rule.
//! - [`StorageError`]: the persistence medium could not be read or written.
//! - [`CatalogError`]: a load search produced no answer.

use std::path::PathBuf;

use thiserror::Error;

/// Input that deserialized cleanly but breaks a domain rule.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// MC number was empty or whitespace only.
    #[error("mc_number must not be empty")]
    EmptyMcNumber,

    /// A currency amount was negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A currency amount was NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFiniteAmount {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Failure of the storage medium behind a [`Repository`](crate::Repository).
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The backing file exists but does not hold a valid record sequence.
    #[error("corrupt store {}: {source}", path.display())]
    Corrupt {
        /// File that failed to parse.
        path: PathBuf,
        /// Parse failure.
        source: serde_json::Error,
    },

    /// Records could not be encoded for writing.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StorageError {
    /// Whether the store was readable but held unparseable data.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}

/// Errors from [`LoadCatalog::search`](crate::LoadCatalog::search).
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No load satisfies the given filters.
    #[error("No matching loads found")]
    NoMatchingLoads,

    /// The catalog source could not be read.
    #[error("catalog unavailable: {0}")]
    Storage(#[from] StorageError),
}
