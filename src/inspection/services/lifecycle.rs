//! Service layer for inspection task creation, lookup, update, and workflow.

use crate::inspection::{
    domain::{
        EmailAddress, InspectionDomainError, InspectionStatus, InspectionTask,
        InspectionTaskChanges, InspectionTaskFilter, InspectionTaskId, InspectionType,
        NewInspectionTask, ParseInspectionStatusError, PhoneNumber, normalize_notes,
    },
    ports::{InspectionTaskRepository, InspectionTaskRepositoryError},
};
use crate::property::{
    domain::{PropertyAddress, PropertyDomainError},
    ports::{AddressRegistry, AddressRegistryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating an inspection task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateInspectionTaskRequest {
    address: String,
    inspection_type: String,
    phone: Option<String>,
    email: Option<String>,
    scheduled_at: Option<DateTime<Utc>>,
    status: Option<String>,
    notes: Option<String>,
}

impl CreateInspectionTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(address: impl Into<String>, inspection_type: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inspection_type: inspection_type.into(),
            phone: None,
            email: None,
            scheduled_at: None,
            status: None,
            notes: None,
        }
    }

    /// Sets the tenant phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the tenant email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the arranged visit time.
    #[must_use]
    pub const fn with_scheduled_at(mut self, scheduled_at: DateTime<Utc>) -> Self {
        self.scheduled_at = Some(scheduled_at);
        self
    }

    /// Sets the initial workflow status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets free-text notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Request payload for a partial inspection task update.
///
/// Only allow-listed fields exist; the identifier, address, and timestamps
/// cannot be updated. For nullable fields `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateInspectionTaskRequest {
    /// New inspection type.
    pub inspection_type: Option<String>,
    /// New or cleared phone number.
    pub phone: Option<Option<String>>,
    /// New or cleared email address.
    pub email: Option<Option<String>>,
    /// New or cleared visit time.
    pub scheduled_at: Option<Option<DateTime<Utc>>>,
    /// New workflow status.
    pub status: Option<String>,
    /// New or cleared notes.
    pub notes: Option<Option<String>>,
}

impl UpdateInspectionTaskRequest {
    /// Creates an empty update request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the workflow status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the tenant email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(Some(email.into()));
        self
    }

    /// Sets the tenant phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(Some(phone.into()));
        self
    }

    /// Sets the arranged visit time.
    #[must_use]
    pub const fn with_scheduled_at(mut self, scheduled_at: DateTime<Utc>) -> Self {
        self.scheduled_at = Some(Some(scheduled_at));
        self
    }

    /// Clears the arranged visit time.
    #[must_use]
    pub const fn clear_scheduled_at(mut self) -> Self {
        self.scheduled_at = Some(None);
        self
    }

    /// Sets free-text notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(Some(notes.into()));
        self
    }

    fn into_changes(self) -> InspectionTaskServiceResult<InspectionTaskChanges> {
        let inspection_type = self
            .inspection_type
            .as_deref()
            .map(InspectionType::try_from)
            .transpose()?;
        let phone = self
            .phone
            .map(|value| PhoneNumber::parse_optional(value.as_deref()))
            .transpose()?;
        let email = self
            .email
            .map(|value| EmailAddress::parse_optional(value.as_deref()))
            .transpose()?;
        let status = self
            .status
            .as_deref()
            .map(InspectionStatus::try_from)
            .transpose()?;

        Ok(InspectionTaskChanges {
            inspection_type,
            phone,
            email,
            scheduled_at: self.scheduled_at,
            status,
            notes: self.notes.map(normalize_notes),
        })
    }
}

/// Service-level errors for inspection task operations.
#[derive(Debug, Error)]
pub enum InspectionTaskServiceError {
    /// A required request field was absent or blank.
    #[error("required field missing: {0}")]
    MissingField(&'static str),

    /// The address is not registered.
    #[error("address not in registry: {0}")]
    UnknownAddress(PropertyAddress),

    /// The address failed validation.
    #[error(transparent)]
    Address(#[from] PropertyDomainError),

    /// Field validation failed.
    #[error(transparent)]
    Domain(#[from] InspectionDomainError),

    /// The requested status is not part of the workflow.
    #[error(transparent)]
    InvalidStatus(#[from] ParseInspectionStatusError),

    /// The task is already in the terminal status.
    #[error("cannot advance inspection task {id} beyond status {status}")]
    CannotAdvance {
        /// Task identifier.
        id: InspectionTaskId,
        /// Current status.
        status: InspectionStatus,
    },

    /// No task has the identifier.
    #[error("inspection task not found: {0}")]
    NotFound(InspectionTaskId),

    /// The address registry could not be consulted.
    #[error(transparent)]
    Registry(#[from] AddressRegistryError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(InspectionTaskRepositoryError),
}

impl InspectionTaskServiceError {
    /// Returns whether the error was caused by invalid caller input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_)
                | Self::UnknownAddress(_)
                | Self::Address(_)
                | Self::Domain(_)
                | Self::InvalidStatus(_)
                | Self::CannotAdvance { .. }
        )
    }
}

impl From<InspectionTaskRepositoryError> for InspectionTaskServiceError {
    fn from(err: InspectionTaskRepositoryError) -> Self {
        match err {
            InspectionTaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for inspection task service operations.
pub type InspectionTaskServiceResult<T> = Result<T, InspectionTaskServiceError>;

/// Inspection task orchestration service.
pub struct InspectionTaskService<R, A, C>
where
    R: InspectionTaskRepository + ?Sized,
    A: AddressRegistry + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    registry: Arc<A>,
    clock: Arc<C>,
}

impl<R, A, C> Clone for InspectionTaskService<R, A, C>
where
    R: InspectionTaskRepository + ?Sized,
    A: AddressRegistry + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            registry: Arc::clone(&self.registry),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, A, C> InspectionTaskService<R, A, C>
where
    R: InspectionTaskRepository + ?Sized,
    A: AddressRegistry + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new inspection task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, registry: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            repository,
            registry,
            clock,
        }
    }

    /// Creates a task for a registered address.
    ///
    /// The status defaults to [`InspectionStatus::NeedsScheduling`] when the
    /// request does not name one.
    ///
    /// # Errors
    ///
    /// Returns [`InspectionTaskServiceError::MissingField`] when the address
    /// or inspection type is blank,
    /// [`InspectionTaskServiceError::UnknownAddress`] when the address is not
    /// registered, a validation error for malformed fields, or a repository
    /// error when persistence fails. Nothing is persisted on failure.
    pub async fn create(
        &self,
        request: CreateInspectionTaskRequest,
    ) -> InspectionTaskServiceResult<InspectionTask> {
        if request.address.trim().is_empty() {
            return Err(InspectionTaskServiceError::MissingField("address"));
        }
        if request.inspection_type.trim().is_empty() {
            return Err(InspectionTaskServiceError::MissingField("inspection_type"));
        }

        let address = PropertyAddress::new(request.address)?;
        if !self.registry.exists(&address).await? {
            tracing::warn!(%address, "rejected inspection task for unregistered address");
            return Err(InspectionTaskServiceError::UnknownAddress(address));
        }

        let status = request
            .status
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(InspectionStatus::try_from)
            .transpose()?;

        let input = NewInspectionTask {
            address,
            inspection_type: InspectionType::try_from(request.inspection_type.as_str())?,
            phone: PhoneNumber::parse_optional(request.phone.as_deref())?,
            email: EmailAddress::parse_optional(request.email.as_deref())?,
            scheduled_at: request.scheduled_at,
            status,
            notes: request.notes,
        };

        let task = InspectionTask::schedule(input, &*self.clock);
        self.repository.store(&task).await?;
        tracing::info!(task_id = %task.id(), address = %task.address(), "created inspection task");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`InspectionTaskServiceError::NotFound`] when no task matches
    /// or a repository error when lookup fails.
    pub async fn get(&self, id: InspectionTaskId) -> InspectionTaskServiceResult<InspectionTask> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(InspectionTaskServiceError::NotFound(id))
    }

    /// Lists tasks selected by `filter`.
    ///
    /// # Errors
    ///
    /// Returns a repository error when lookup fails.
    pub async fn list(
        &self,
        filter: InspectionTaskFilter,
    ) -> InspectionTaskServiceResult<Vec<InspectionTask>> {
        Ok(self.repository.list(filter).await?)
    }

    /// Applies a partial update to a task.
    ///
    /// Any status in the workflow may be set directly, regardless of the
    /// current status.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed fields,
    /// [`InspectionTaskServiceError::NotFound`] when no task matches, or a
    /// repository error when persistence fails.
    pub async fn update(
        &self,
        id: InspectionTaskId,
        request: UpdateInspectionTaskRequest,
    ) -> InspectionTaskServiceResult<InspectionTask> {
        let changes = request.into_changes()?;
        self.apply(id, &changes).await
    }

    /// Moves a task to the next workflow status.
    ///
    /// # Errors
    ///
    /// Returns [`InspectionTaskServiceError::CannotAdvance`] when the task is
    /// already completed, [`InspectionTaskServiceError::NotFound`] when no
    /// task matches, or a repository error when persistence fails.
    pub async fn advance_status(
        &self,
        id: InspectionTaskId,
    ) -> InspectionTaskServiceResult<InspectionTask> {
        let task = self.get(id).await?;
        let current = task.status();
        let next = current
            .next()
            .ok_or(InspectionTaskServiceError::CannotAdvance {
                id,
                status: current,
            })?;
        self.apply(id, &InspectionTaskChanges::status(next)).await
    }

    /// Permanently deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`InspectionTaskServiceError::NotFound`] when no task matches
    /// or a repository error when deletion fails.
    pub async fn delete(&self, id: InspectionTaskId) -> InspectionTaskServiceResult<()> {
        self.repository.delete(id).await?;
        tracing::info!(task_id = %id, "deleted inspection task");
        Ok(())
    }

    async fn apply(
        &self,
        id: InspectionTaskId,
        changes: &InspectionTaskChanges,
    ) -> InspectionTaskServiceResult<InspectionTask> {
        let updated = self
            .repository
            .apply_changes(id, changes, self.clock.utc())
            .await?;
        tracing::info!(task_id = %id, status = %updated.status(), "updated inspection task");
        Ok(updated)
    }
}
