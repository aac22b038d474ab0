//! Adapter implementations for notice delivery.

pub mod memory;
pub mod smtp;
