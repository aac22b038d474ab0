//! Port contracts for notice delivery.

mod transport;

pub use transport::{MailTransport, MailTransportError, MailTransportResult};
