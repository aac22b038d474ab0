//! Field-level change set for inspection task updates.

use super::{EmailAddress, InspectionStatus, InspectionType, PhoneNumber};
use chrono::{DateTime, Utc};

/// Allow-listed, validated changes to an inspection task.
///
/// Only mutable fields are representable: the identifier, address, and
/// timestamps cannot be expressed here. For nullable fields the outer
/// `Option` selects whether the field changes and the inner `Option` is the
/// new value, so `Some(None)` clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectionTaskChanges {
    /// New inspection type.
    pub inspection_type: Option<InspectionType>,
    /// New or cleared tenant phone number.
    pub phone: Option<Option<PhoneNumber>>,
    /// New or cleared tenant email address.
    pub email: Option<Option<EmailAddress>>,
    /// New or cleared visit time.
    pub scheduled_at: Option<Option<DateTime<Utc>>>,
    /// New workflow status.
    pub status: Option<InspectionStatus>,
    /// New or cleared notes.
    pub notes: Option<Option<String>>,
}

impl InspectionTaskChanges {
    /// Creates a change set that only sets the workflow status.
    #[must_use]
    pub fn status(status: InspectionStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Returns whether the change set touches no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.inspection_type.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.scheduled_at.is_none()
            && self.status.is_none()
            && self.notes.is_none()
    }
}
