//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only programming/caller errors live here. Expected business outcomes such
/// as an exhausted stock are reported through notices, not errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A unique key (e.g. a product code) is already taken.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// An argument was outside the accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A requested resource was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn duplicate_key(msg: impl Into<String>) -> Self {
        Self::DuplicateKey(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
