//! Validated property address type.

use super::PropertyDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for an address, matching the `VARCHAR(255)` column.
const MAX_ADDRESS_LENGTH: usize = 255;

/// Normalised street address of a property in the registry.
///
/// Leading and trailing whitespace is removed and internal whitespace runs are
/// collapsed to a single space, so `"12  Main St "` and `"12 Main St"` name
/// the same registry entry. Case is preserved.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PropertyAddress(String);

impl PropertyAddress {
    /// Creates a normalised property address.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyDomainError::EmptyAddress`] when the value is blank
    /// or [`PropertyDomainError::AddressTooLong`] when the normalised value
    /// exceeds 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, PropertyDomainError> {
        let raw = value.into();
        let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");

        if normalized.is_empty() {
            return Err(PropertyDomainError::EmptyAddress);
        }

        if normalized.chars().count() > MAX_ADDRESS_LENGTH {
            return Err(PropertyDomainError::AddressTooLong(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PropertyAddress {
    type Error = PropertyDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PropertyAddress> for String {
    fn from(value: PropertyAddress) -> Self {
        value.0
    }
}

impl AsRef<str> for PropertyAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PropertyAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
