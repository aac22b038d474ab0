//! Request bodies and their conversion into service requests.
//!
//! Bodies only declare the fields a caller may set. Anything else, such as
//! `id`, `address` on update, or the timestamps, is ignored during
//! deserialization.

use crate::inspection::services::{CreateInspectionTaskRequest, UpdateInspectionTaskRequest};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, de};

const LOCAL_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Body of `POST /tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreateTaskBody {
    /// Registered property address.
    pub address: Option<String>,
    /// `routine`, `move-in`, or `move-out`.
    pub inspection_type: Option<String>,
    /// Tenant phone number.
    pub phone: Option<String>,
    /// Tenant email address.
    pub email: Option<String>,
    /// Arranged visit time.
    #[serde(deserialize_with = "optional_timestamp")]
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Initial workflow status.
    pub status: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
}

impl From<CreateTaskBody> for CreateInspectionTaskRequest {
    fn from(body: CreateTaskBody) -> Self {
        let mut request = Self::new(
            body.address.unwrap_or_default(),
            body.inspection_type.unwrap_or_default(),
        );
        if let Some(phone) = body.phone {
            request = request.with_phone(phone);
        }
        if let Some(email) = body.email {
            request = request.with_email(email);
        }
        if let Some(scheduled_at) = body.scheduled_at {
            request = request.with_scheduled_at(scheduled_at);
        }
        if let Some(status) = body.status {
            request = request.with_status(status);
        }
        if let Some(notes) = body.notes {
            request = request.with_notes(notes);
        }
        request
    }
}

/// Body of `PUT /tasks/{id}`.
///
/// For nullable fields an explicit `null` clears the value while an absent
/// key leaves it unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdateTaskBody {
    /// New inspection type.
    pub inspection_type: Option<String>,
    /// New or cleared phone number.
    #[serde(deserialize_with = "present")]
    pub phone: Option<Option<String>>,
    /// New or cleared email address.
    #[serde(deserialize_with = "present")]
    pub email: Option<Option<String>>,
    /// New or cleared visit time.
    #[serde(deserialize_with = "present_timestamp")]
    pub scheduled_at: Option<Option<DateTime<Utc>>>,
    /// New workflow status.
    pub status: Option<String>,
    /// New or cleared notes.
    #[serde(deserialize_with = "present")]
    pub notes: Option<Option<String>>,
}

impl From<UpdateTaskBody> for UpdateInspectionTaskRequest {
    fn from(body: UpdateTaskBody) -> Self {
        Self {
            inspection_type: body.inspection_type,
            phone: body.phone,
            email: body.email,
            scheduled_at: body.scheduled_at,
            status: body.status,
            notes: body.notes,
        }
    }
}

/// Body of `POST /tasks/send-email`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SendEmailBody {
    /// Task to notify about.
    pub task_id: Option<String>,
    /// Whether to move the task to `EmailSent` after a successful send.
    pub mark_as_sent: bool,
}

/// Query string of `GET /tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListTasksQuery {
    /// `all`, `active`, or `completed`.
    pub filter: Option<String>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn present_timestamp<'de, D>(deserializer: D) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_timestamp(deserializer).map(Some)
}

/// Accepts RFC 3339 timestamps, or zone-less `YYYY-MM-DDTHH:MM[:SS]` values
/// read as UTC. Blank strings and `null` mean no time.
fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_timestamp(text)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp '{text}'"))),
    }
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|parsed| parsed.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            LOCAL_TIMESTAMP_FORMATS.iter().find_map(|format| {
                NaiveDateTime::parse_from_str(text, format)
                    .ok()
                    .map(|naive| naive.and_utc())
            })
        })
}
