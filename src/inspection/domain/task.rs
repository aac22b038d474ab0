//! Inspection task aggregate root.

use super::{
    EmailAddress, InspectionStatus, InspectionTaskChanges, InspectionTaskId, InspectionType,
    PhoneNumber,
};
use crate::property::domain::PropertyAddress;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Inspection task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionTask {
    id: InspectionTaskId,
    address: PropertyAddress,
    inspection_type: InspectionType,
    phone: Option<PhoneNumber>,
    email: Option<EmailAddress>,
    scheduled_at: Option<DateTime<Utc>>,
    status: InspectionStatus,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Validated input for scheduling a new inspection task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInspectionTask {
    /// Registered property address.
    pub address: PropertyAddress,
    /// Purpose of the visit.
    pub inspection_type: InspectionType,
    /// Tenant phone number, if known.
    pub phone: Option<PhoneNumber>,
    /// Tenant email address, if known.
    pub email: Option<EmailAddress>,
    /// Arranged visit time, if any.
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Initial status; defaults to [`InspectionStatus::NeedsScheduling`].
    pub status: Option<InspectionStatus>,
    /// Free-text notes.
    pub notes: Option<String>,
}

impl NewInspectionTask {
    /// Creates input with the required fields and no optional details.
    #[must_use]
    pub const fn new(address: PropertyAddress, inspection_type: InspectionType) -> Self {
        Self {
            address,
            inspection_type,
            phone: None,
            email: None,
            scheduled_at: None,
            status: None,
            notes: None,
        }
    }
}

/// Parameter object for reconstructing a persisted inspection task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedInspectionTaskData {
    /// Persisted task identifier.
    pub id: InspectionTaskId,
    /// Persisted property address.
    pub address: PropertyAddress,
    /// Persisted inspection type.
    pub inspection_type: InspectionType,
    /// Persisted phone number.
    pub phone: Option<PhoneNumber>,
    /// Persisted email address.
    pub email: Option<EmailAddress>,
    /// Persisted visit time.
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Persisted workflow status.
    pub status: InspectionStatus,
    /// Persisted notes.
    pub notes: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl InspectionTask {
    /// Creates a new task with a fresh identifier.
    #[must_use]
    pub fn schedule(input: NewInspectionTask, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: InspectionTaskId::new(),
            address: input.address,
            inspection_type: input.inspection_type,
            phone: input.phone,
            email: input.email,
            scheduled_at: input.scheduled_at,
            status: input.status.unwrap_or_default(),
            notes: normalize_notes(input.notes),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedInspectionTaskData) -> Self {
        Self {
            id: data.id,
            address: data.address,
            inspection_type: data.inspection_type,
            phone: data.phone,
            email: data.email,
            scheduled_at: data.scheduled_at,
            status: data.status,
            notes: data.notes,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> InspectionTaskId {
        self.id
    }

    /// Returns the property address.
    #[must_use]
    pub const fn address(&self) -> &PropertyAddress {
        &self.address
    }

    /// Returns the inspection type.
    #[must_use]
    pub const fn inspection_type(&self) -> InspectionType {
        self.inspection_type
    }

    /// Returns the tenant phone number, if any.
    #[must_use]
    pub const fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    /// Returns the tenant email address, if any.
    #[must_use]
    pub const fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Returns the arranged visit time, if any.
    #[must_use]
    pub const fn scheduled_at(&self) -> Option<DateTime<Utc>> {
        self.scheduled_at
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> InspectionStatus {
        self.status
    }

    /// Returns the notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Merges the change set into this task.
    ///
    /// Fields absent from `changes` keep their current values. The update
    /// timestamp is set to `updated_at` unless the change set is empty.
    pub fn apply_changes(&mut self, changes: &InspectionTaskChanges, updated_at: DateTime<Utc>) {
        if changes.is_empty() {
            return;
        }
        if let Some(inspection_type) = changes.inspection_type {
            self.inspection_type = inspection_type;
        }
        if let Some(phone) = &changes.phone {
            self.phone.clone_from(phone);
        }
        if let Some(email) = &changes.email {
            self.email.clone_from(email);
        }
        if let Some(scheduled_at) = changes.scheduled_at {
            self.scheduled_at = scheduled_at;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(notes) = &changes.notes {
            self.notes = normalize_notes(notes.clone());
        }
        self.updated_at = updated_at;
    }
}

/// Trims notes and treats blank text as absent.
pub(crate) fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}
