//! Dispatches inspection notices to tenants.

use crate::inspection::domain::{InspectionTask, InspectionTaskId};
use crate::notification::{
    domain::{NoticeComposer, NoticeRenderError},
    ports::{MailTransport, MailTransportError},
};
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by [`NotificationDispatcher::send`].
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    /// The task carries no contact email.
    #[error("inspection task {0} has no contact email")]
    MissingRecipient(InspectionTaskId),

    /// The notice could not be rendered.
    #[error(transparent)]
    Template(#[from] NoticeRenderError),

    /// The transport failed to deliver the notice.
    #[error("failed to deliver inspection notice: {0}")]
    DeliveryFailure(#[from] MailTransportError),
}

/// Composes and sends the inspection notice for a task.
///
/// The dispatcher never touches the task store; marking a task as notified
/// after a successful send is the caller's decision.
pub struct NotificationDispatcher<T>
where
    T: MailTransport + ?Sized,
{
    transport: Arc<T>,
    composer: NoticeComposer,
}

impl<T> Clone for NotificationDispatcher<T>
where
    T: MailTransport + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            composer: self.composer.clone(),
        }
    }
}

impl<T> NotificationDispatcher<T>
where
    T: MailTransport + ?Sized,
{
    /// Creates a dispatcher from a transport and a notice composer.
    #[must_use]
    pub const fn new(transport: Arc<T>, composer: NoticeComposer) -> Self {
        Self {
            transport,
            composer,
        }
    }

    /// Sends the notice for `task` to its contact email.
    ///
    /// Exactly one delivery attempt is made.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::MissingRecipient`] without contacting the
    /// transport when the task has no email, [`NotificationError::Template`]
    /// when rendering fails, and [`NotificationError::DeliveryFailure`] when
    /// the transport reports an error.
    pub async fn send(&self, task: &InspectionTask) -> Result<(), NotificationError> {
        let Some(recipient) = task.email().cloned() else {
            tracing::warn!(task_id = %task.id(), "notice not sent: task has no contact email");
            return Err(NotificationError::MissingRecipient(task.id()));
        };

        let email = self.composer.compose(task, recipient)?;
        self.transport
            .deliver(&email)
            .await
            .inspect_err(|err| {
                tracing::error!(task_id = %task.id(), error = %err, "notice delivery failed");
            })?;

        tracing::info!(
            task_id = %task.id(),
            recipient = %email.recipient(),
            language = ?self.composer.language(),
            "inspection notice sent"
        );
        Ok(())
    }
}
