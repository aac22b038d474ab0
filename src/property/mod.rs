//! Address registry for inspectable properties.
//!
//! The registry is the authoritative, deduplicated list of property addresses
//! that inspection tasks may reference. It is read-mostly reference data:
//! entries are seeded by an import flow and read during task creation.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
