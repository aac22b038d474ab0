//! Error types for property address validation.

use thiserror::Error;

/// Errors returned while constructing property domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PropertyDomainError {
    /// The address is empty after trimming.
    #[error("property address must not be empty")]
    EmptyAddress,

    /// The address exceeds the persisted column width.
    #[error("property address '{0}' exceeds 255 characters")]
    AddressTooLong(String),
}
