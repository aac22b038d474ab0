//! Adapter implementations for inspection task persistence.

pub mod memory;
pub mod postgres;
