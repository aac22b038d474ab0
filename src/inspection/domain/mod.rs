//! Domain model for inspection tasks.
//!
//! The inspection domain models task scheduling, contact details, the
//! workflow status machine, and list filtering while keeping infrastructure
//! concerns outside the domain boundary.

mod changes;
mod contact;
mod error;
mod filter;
mod ids;
mod kind;
mod status;
mod task;

pub use changes::InspectionTaskChanges;
pub use contact::{EmailAddress, PhoneNumber};
pub use error::{InspectionDomainError, ParseInspectionStatusError};
pub use filter::InspectionTaskFilter;
pub use ids::InspectionTaskId;
pub use kind::InspectionType;
pub use status::InspectionStatus;
pub use task::{InspectionTask, NewInspectionTask, PersistedInspectionTaskData};
pub(crate) use task::normalize_notes;
