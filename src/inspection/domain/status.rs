//! Inspection workflow status and its ordered transitions.

use super::ParseInspectionStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a task in the inspection workflow.
///
/// The workflow is linear:
/// `NeedsScheduling → EmailSent → AwaitingInspection → Completed`.
/// The order is advisory: direct updates may set any status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InspectionStatus {
    /// A visit time still has to be arranged with the tenant.
    #[default]
    NeedsScheduling,
    /// The tenant has been notified by email.
    EmailSent,
    /// The visit is arranged and waiting to happen.
    AwaitingInspection,
    /// The inspection is finished.
    Completed,
}

impl InspectionStatus {
    /// Every status in workflow order.
    pub const WORKFLOW: [Self; 4] = [
        Self::NeedsScheduling,
        Self::EmailSent,
        Self::AwaitingInspection,
        Self::Completed,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NeedsScheduling => "NeedsScheduling",
            Self::EmailSent => "EmailSent",
            Self::AwaitingInspection => "AwaitingInspection",
            Self::Completed => "Completed",
        }
    }

    /// Returns the status that follows this one in the workflow.
    ///
    /// Returns `None` for [`InspectionStatus::Completed`].
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::NeedsScheduling => Some(Self::EmailSent),
            Self::EmailSent => Some(Self::AwaitingInspection),
            Self::AwaitingInspection => Some(Self::Completed),
            Self::Completed => None,
        }
    }

    /// Looks up a raw status and returns the status that follows it.
    ///
    /// Unknown and terminal statuses both yield `None`.
    #[must_use]
    pub fn advance(raw: &str) -> Option<Self> {
        Self::try_from(raw).ok().and_then(Self::next)
    }

    /// Returns whether no further workflow step exists.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

impl TryFrom<&str> for InspectionStatus {
    type Error = ParseInspectionStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "needsscheduling" => Ok(Self::NeedsScheduling),
            "emailsent" => Ok(Self::EmailSent),
            "awaitinginspection" => Ok(Self::AwaitingInspection),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseInspectionStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
