//! Port contracts for the property address registry.

pub mod registry;

pub use registry::{AddressRegistry, AddressRegistryError, AddressRegistryResult};
