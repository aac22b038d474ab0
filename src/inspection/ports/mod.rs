//! Port contracts for inspection task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by inspection
//! services.

pub mod repository;

pub use repository::{
    InspectionTaskRepository, InspectionTaskRepositoryError, InspectionTaskRepositoryResult,
};
