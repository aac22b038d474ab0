//! Service layer for tenant notification.

mod dispatcher;

pub use dispatcher::{NotificationDispatcher, NotificationError};
