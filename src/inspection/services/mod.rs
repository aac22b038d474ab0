//! Application services for inspection task orchestration.

mod lifecycle;

pub use lifecycle::{
    CreateInspectionTaskRequest, InspectionTaskService, InspectionTaskServiceError,
    InspectionTaskServiceResult, UpdateInspectionTaskRequest,
};
