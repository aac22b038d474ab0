//! Domain model for the property address registry.

mod address;
mod error;

pub use address::PropertyAddress;
pub use error::PropertyDomainError;
