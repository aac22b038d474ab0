//! Diesel row models for inspection task persistence.

use super::schema::inspection_tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for inspection task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = inspection_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InspectionTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Registered property address.
    pub address: String,
    /// Inspection type.
    pub inspection_type: String,
    /// Tenant phone number.
    pub phone: Option<String>,
    /// Tenant email address.
    pub email: Option<String>,
    /// Arranged visit time.
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Workflow status.
    pub status: String,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for inspection task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = inspection_tasks)]
pub struct NewInspectionTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Registered property address.
    pub address: String,
    /// Inspection type.
    pub inspection_type: String,
    /// Tenant phone number.
    pub phone: Option<String>,
    /// Tenant email address.
    pub email: Option<String>,
    /// Arranged visit time.
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Workflow status.
    pub status: String,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Partial update model; `None` leaves a column untouched.
///
/// Nullable columns use `Option<Option<_>>` so `Some(None)` writes `NULL`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = inspection_tasks)]
pub struct InspectionTaskChangeset {
    /// New inspection type.
    pub inspection_type: Option<String>,
    /// New or cleared phone number.
    pub phone: Option<Option<String>>,
    /// New or cleared email address.
    pub email: Option<Option<String>>,
    /// New or cleared visit time.
    pub scheduled_at: Option<Option<DateTime<Utc>>>,
    /// New workflow status.
    pub status: Option<String>,
    /// New or cleared notes.
    pub notes: Option<Option<String>>,
    /// Update timestamp.
    pub updated_at: DateTime<Utc>,
}
