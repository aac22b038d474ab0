//! In-memory address registry adapter.

mod registry;

pub use registry::InMemoryAddressRegistry;
