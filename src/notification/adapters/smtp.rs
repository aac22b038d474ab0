//! SMTP mail transport backed by `lettre`.

use crate::notification::{
    domain::OutboundEmail,
    ports::{MailTransport, MailTransportError, MailTransportResult},
};
use async_trait::async_trait;
use lettre::{
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// How the connection to the relay is secured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SmtpSecurity {
    /// TLS from the first byte, usually on port 465.
    #[default]
    Implicit,
    /// Plain connection upgraded with `STARTTLS`, usually on port 587.
    StartTls,
}

/// Error returned while parsing an SMTP security mode.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported SMTP security mode '{0}', expected implicit or starttls")]
pub struct ParseSmtpSecurityError(pub String);

impl TryFrom<&str> for SmtpSecurity {
    type Error = ParseSmtpSecurityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "implicit" | "tls" | "ssl" => Ok(Self::Implicit),
            "starttls" => Ok(Self::StartTls),
            _ => Err(ParseSmtpSecurityError(value.to_owned())),
        }
    }
}

/// Relay and sender settings for [`SmtpMailTransport`].
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    /// Relay host name.
    pub host: String,
    /// Relay port.
    pub port: u16,
    /// Connection security mode.
    pub security: SmtpSecurity,
    /// Account user name.
    pub username: String,
    /// Account password.
    pub password: String,
    /// Sender mailbox address.
    pub from_address: String,
    /// Sender display name.
    pub from_name: String,
    /// Per-command network timeout.
    pub timeout: Duration,
}

impl fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("security", &self.security)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("from_address", &self.from_address)
            .field("from_name", &self.from_name)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Errors raised while building an SMTP transport.
#[derive(Debug, Error)]
pub enum SmtpSetupError {
    /// The sender address is not a valid mailbox.
    #[error("invalid sender address '{address}': {source}")]
    Sender {
        /// Offending address.
        address: String,
        /// Parser diagnostic.
        source: lettre::address::AddressError,
    },

    /// The relay host could not be configured.
    #[error("invalid SMTP relay '{host}': {source}")]
    Relay {
        /// Offending host.
        host: String,
        /// Transport diagnostic.
        source: lettre::transport::smtp::Error,
    },
}

/// Mail transport delivering through an authenticated SMTP relay.
///
/// Each call to [`MailTransport::deliver`] makes one attempt; no retries are
/// performed.
#[derive(Clone)]
pub struct SmtpMailTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    relay: String,
}

impl SmtpMailTransport {
    /// Builds a transport from relay settings.
    ///
    /// No connection is opened until the first delivery.
    ///
    /// # Errors
    ///
    /// Returns [`SmtpSetupError`] when the sender address or relay host is
    /// invalid.
    pub fn new(settings: &SmtpSettings) -> Result<Self, SmtpSetupError> {
        let address: Address =
            settings
                .from_address
                .parse()
                .map_err(|source| SmtpSetupError::Sender {
                    address: settings.from_address.clone(),
                    source,
                })?;
        let display_name = settings.from_name.trim();
        let sender = Mailbox::new(
            (!display_name.is_empty()).then(|| display_name.to_owned()),
            address,
        );

        let builder = match settings.security {
            SmtpSecurity::Implicit => AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host),
            SmtpSecurity::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
            }
        }
        .map_err(|source| SmtpSetupError::Relay {
            host: settings.host.clone(),
            source,
        })?;

        let mailer = builder
            .port(settings.port)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .timeout(Some(settings.timeout))
            .build();

        Ok(Self {
            mailer,
            sender,
            relay: format!("{}:{}", settings.host, settings.port),
        })
    }

    fn build_message(&self, email: &OutboundEmail) -> MailTransportResult<Message> {
        let recipient: Address = email
            .recipient()
            .as_str()
            .parse()
            .map_err(|err: lettre::address::AddressError| {
                MailTransportError::InvalidMessage(err.to_string())
            })?;

        Message::builder()
            .from(self.sender.clone())
            .to(Mailbox::new(None, recipient))
            .subject(email.subject())
            .multipart(MultiPart::alternative_plain_html(
                email.text_body().to_owned(),
                email.html_body().to_owned(),
            ))
            .map_err(|err| MailTransportError::InvalidMessage(err.to_string()))
    }
}

impl fmt::Debug for SmtpMailTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpMailTransport")
            .field("relay", &self.relay)
            .field("sender", &self.sender.to_string())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn deliver(&self, email: &OutboundEmail) -> MailTransportResult<()> {
        let message = self.build_message(email)?;
        let response = self
            .mailer
            .send(message)
            .await
            .map_err(MailTransportError::delivery)?;
        tracing::debug!(
            relay = %self.relay,
            code = %response.code(),
            "SMTP relay accepted message"
        );
        Ok(())
    }
}
