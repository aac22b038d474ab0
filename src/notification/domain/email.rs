//! Rendered email ready for delivery.

use crate::inspection::domain::EmailAddress;

/// Fully rendered message addressed to a single recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    recipient: EmailAddress,
    subject: String,
    text_body: String,
    html_body: String,
}

impl OutboundEmail {
    /// Creates a rendered message.
    #[must_use]
    pub const fn new(
        recipient: EmailAddress,
        subject: String,
        text_body: String,
        html_body: String,
    ) -> Self {
        Self {
            recipient,
            subject,
            text_body,
            html_body,
        }
    }

    /// Returns the recipient address.
    #[must_use]
    pub const fn recipient(&self) -> &EmailAddress {
        &self.recipient
    }

    /// Returns the subject line.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the plain-text body.
    #[must_use]
    pub fn text_body(&self) -> &str {
        &self.text_body
    }

    /// Returns the HTML body.
    #[must_use]
    pub fn html_body(&self) -> &str {
        &self.html_body
    }
}
