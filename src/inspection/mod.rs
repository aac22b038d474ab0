//! Inspection task tracking.
//!
//! This module implements the inspection task store and its orchestration
//! service: creating tasks for registered property addresses, listing active
//! and completed work, applying field-level updates that keep the address
//! immutable, deleting tasks, and moving tasks through the fixed inspection
//! workflow. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
