//! Inspection type values.

use super::InspectionDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Purpose of an inspection visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InspectionType {
    /// Periodic check during a tenancy.
    Routine,
    /// Condition report at the start of a tenancy.
    MoveIn,
    /// Condition report at the end of a tenancy.
    MoveOut,
}

impl InspectionType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Routine => "routine",
            Self::MoveIn => "move-in",
            Self::MoveOut => "move-out",
        }
    }
}

impl TryFrom<&str> for InspectionType {
    type Error = InspectionDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "routine" => Ok(Self::Routine),
            "move-in" => Ok(Self::MoveIn),
            "move-out" => Ok(Self::MoveOut),
            _ => Err(InspectionDomainError::InvalidInspectionType(
                value.to_owned(),
            )),
        }
    }
}

impl fmt::Display for InspectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
