//! Diesel row models for registry persistence.

use super::schema::properties;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Insert model for registry entries.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = properties)]
pub struct NewPropertyRow {
    /// Normalised street address.
    pub address: String,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}
