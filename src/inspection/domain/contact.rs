//! Tenant contact details attached to inspection tasks.

use super::InspectionDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a phone number, matching the `VARCHAR(32)` column.
const MAX_PHONE_LENGTH: usize = 32;
const MIN_PHONE_DIGITS: usize = 6;
const MAX_PHONE_DIGITS: usize = 15;
/// Maximum length for an email address, matching the `VARCHAR(255)` column.
const MAX_EMAIL_LENGTH: usize = 255;

/// Loosely validated mobile or landline phone number.
///
/// Accepts an optional leading `+`, digits, and the separators space, `-`,
/// `.`, `(` and `)`. Between 6 and 15 digits are required. The value is
/// stored trimmed but otherwise as entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Creates a validated phone number.
    ///
    /// # Errors
    ///
    /// Returns [`InspectionDomainError::InvalidPhoneNumber`] when the value
    /// contains unexpected characters or has too few or too many digits.
    pub fn new(value: impl Into<String>) -> Result<Self, InspectionDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let body = trimmed.strip_prefix('+').unwrap_or(trimmed);

        let has_only_phone_chars = body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '.' | '(' | ')'));
        let digits = body.chars().filter(char::is_ascii_digit).count();

        if trimmed.len() > MAX_PHONE_LENGTH
            || !has_only_phone_chars
            || !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
        {
            return Err(InspectionDomainError::InvalidPhoneNumber(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Parses an optional phone number, treating blank input as absent.
    ///
    /// # Errors
    ///
    /// Returns [`InspectionDomainError::InvalidPhoneNumber`] when a non-blank
    /// value is invalid.
    pub fn parse_optional(value: Option<&str>) -> Result<Option<Self>, InspectionDomainError> {
        match value.map(str::trim) {
            None | Some("") => Ok(None),
            Some(present) => Self::new(present).map(Some),
        }
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = InspectionDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tenant email address, trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// # Errors
    ///
    /// Returns [`InspectionDomainError::InvalidEmailAddress`] unless the value
    /// has exactly one `@`, a non-empty local part, and a dotted domain, with
    /// no whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, InspectionDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_lowercase();

        if normalized.len() > MAX_EMAIL_LENGTH || !is_email_shaped(&normalized) {
            return Err(InspectionDomainError::InvalidEmailAddress(raw));
        }

        Ok(Self(normalized))
    }

    /// Parses an optional email address, treating blank input as absent.
    ///
    /// # Errors
    ///
    /// Returns [`InspectionDomainError::InvalidEmailAddress`] when a
    /// non-blank value is invalid.
    pub fn parse_optional(value: Option<&str>) -> Result<Option<Self>, InspectionDomainError> {
        match value.map(str::trim) {
            None | Some("") => Ok(None),
            Some(present) => Self::new(present).map(Some),
        }
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

impl TryFrom<String> for EmailAddress {
    type Error = InspectionDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
