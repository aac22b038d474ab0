//! In-memory mail transport for tests and local runs.

use crate::notification::{
    domain::OutboundEmail,
    ports::{MailTransport, MailTransportError, MailTransportResult},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Transport that records delivered messages instead of sending them.
///
/// A failure can be armed with [`RecordingMailTransport::fail_with`]; it
/// applies to every subsequent delivery until cleared.
#[derive(Debug, Clone, Default)]
pub struct RecordingMailTransport {
    state: Arc<RwLock<RecordingState>>,
}

#[derive(Debug, Default)]
struct RecordingState {
    delivered: Vec<OutboundEmail>,
    failure: Option<String>,
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct SimulatedFailure(String);

impl RecordingMailTransport {
    /// Creates an empty recording transport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent deliveries fail with `message`.
    ///
    /// # Errors
    ///
    /// Returns [`MailTransportError::Delivery`] when lock acquisition fails.
    pub fn fail_with(&self, message: impl Into<String>) -> MailTransportResult<()> {
        self.write_state()?.failure = Some(message.into());
        Ok(())
    }

    /// Clears an armed failure.
    ///
    /// # Errors
    ///
    /// Returns [`MailTransportError::Delivery`] when lock acquisition fails.
    pub fn clear_failure(&self) -> MailTransportResult<()> {
        self.write_state()?.failure = None;
        Ok(())
    }

    /// Returns the messages delivered so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`MailTransportError::Delivery`] when lock acquisition fails.
    pub fn delivered(&self) -> MailTransportResult<Vec<OutboundEmail>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.delivered.clone())
    }

    fn write_state(
        &self,
    ) -> MailTransportResult<std::sync::RwLockWriteGuard<'_, RecordingState>> {
        self.state.write().map_err(lock_error)
    }
}

#[async_trait]
impl MailTransport for RecordingMailTransport {
    async fn deliver(&self, email: &OutboundEmail) -> MailTransportResult<()> {
        let mut state = self.write_state()?;
        if let Some(reason) = state.failure.clone() {
            return Err(MailTransportError::delivery(SimulatedFailure(reason)));
        }
        state.delivered.push(email.clone());
        Ok(())
    }
}

fn lock_error<T>(err: std::sync::PoisonError<T>) -> MailTransportError {
    MailTransportError::delivery(std::io::Error::other(err.to_string()))
}
