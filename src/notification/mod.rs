//! Tenant notification for inspection tasks.
//!
//! The dispatcher composes a fixed inspection notice from a task and hands
//! it to a mail transport in a single delivery attempt. Updating the task's
//! status after a successful send is left to the caller.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
