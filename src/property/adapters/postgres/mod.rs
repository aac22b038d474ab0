//! `PostgreSQL` adapter for the property address registry.

mod models;
mod registry;
mod schema;

pub use registry::PostgresAddressRegistry;
