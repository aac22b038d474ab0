//! Error types for inspection domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing inspection domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InspectionDomainError {
    /// The inspection type is not one of the supported kinds.
    #[error("unsupported inspection type '{0}', expected routine, move-in, or move-out")]
    InvalidInspectionType(String),

    /// The phone number does not look like a mobile or landline number.
    #[error("invalid phone number '{0}'")]
    InvalidPhoneNumber(String),

    /// The email address is not shaped like `local@domain.tld`.
    #[error("invalid email address '{0}'")]
    InvalidEmailAddress(String),

    /// The task identifier is not a UUID.
    #[error("invalid inspection task identifier '{0}'")]
    InvalidTaskId(String),

    /// The list filter is not one of `all`, `active`, or `completed`.
    #[error("unsupported task filter '{0}', expected all, active, or completed")]
    InvalidFilter(String),
}

/// Error returned while parsing workflow statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown inspection status: {0}")]
pub struct ParseInspectionStatusError(pub String);
