//! Identifier type for inspection tasks.

use super::InspectionDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Externally stable identifier for an inspection task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InspectionTaskId(Uuid);

impl InspectionTaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a task identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses a task identifier from its textual form.
    ///
    /// # Errors
    ///
    /// Returns [`InspectionDomainError::InvalidTaskId`] when the value is not
    /// a UUID.
    pub fn parse(value: &str) -> Result<Self, InspectionDomainError> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| InspectionDomainError::InvalidTaskId(value.to_owned()))
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for InspectionTaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InspectionTaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
