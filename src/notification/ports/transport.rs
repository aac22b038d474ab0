//! Outbound mail transport port.

use crate::notification::domain::OutboundEmail;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for mail transport operations.
pub type MailTransportResult<T> = Result<T, MailTransportError>;

/// Delivery contract for rendered notices.
///
/// Implementations make exactly one delivery attempt per call.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Delivers a rendered message.
    ///
    /// # Errors
    ///
    /// Returns [`MailTransportError::InvalidMessage`] when the message cannot
    /// be encoded for the wire, or [`MailTransportError::Delivery`] when the
    /// relay rejects or drops it.
    async fn deliver(&self, email: &OutboundEmail) -> MailTransportResult<()>;
}

/// Errors returned by mail transport adapters.
#[derive(Debug, Clone, Error)]
pub enum MailTransportError {
    /// The message could not be built for the transport.
    #[error("invalid outbound message: {0}")]
    InvalidMessage(String),

    /// The transport failed to hand the message to the relay.
    #[error("mail delivery failed: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),
}

impl MailTransportError {
    /// Wraps a delivery error from the transport adapter.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}
