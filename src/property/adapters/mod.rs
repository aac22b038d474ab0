//! Adapter implementations for the property address registry.

pub mod memory;
pub mod postgres;
