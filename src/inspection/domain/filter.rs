//! List filters and their ordering rules.

use super::{InspectionDomainError, InspectionStatus, InspectionTask};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Selection applied when listing inspection tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InspectionTaskFilter {
    /// Every task, ordered like [`InspectionTaskFilter::Active`].
    All,
    /// Tasks not yet completed, soonest visit first.
    ///
    /// Ordered by `scheduled_at` ascending with unscheduled tasks last, then
    /// by creation time, newest first.
    #[default]
    Active,
    /// Completed tasks, most recent visit first.
    ///
    /// Ordered by `scheduled_at` descending with unscheduled tasks last, then
    /// by creation time, newest first.
    Completed,
}

impl InspectionTaskFilter {
    /// Returns whether the task belongs in this selection.
    #[must_use]
    pub fn matches(self, task: &InspectionTask) -> bool {
        match self {
            Self::All => true,
            Self::Active => task.status() != InspectionStatus::Completed,
            Self::Completed => task.status() == InspectionStatus::Completed,
        }
    }

    /// Compares two tasks according to this selection's ordering.
    #[must_use]
    pub fn compare(self, left: &InspectionTask, right: &InspectionTask) -> Ordering {
        let by_schedule = match self {
            Self::All | Self::Active => {
                nulls_last(left.scheduled_at(), right.scheduled_at(), Ord::cmp)
            }
            Self::Completed => nulls_last(left.scheduled_at(), right.scheduled_at(), |l, r| {
                r.cmp(l)
            }),
        };
        by_schedule.then_with(|| right.created_at().cmp(&left.created_at()))
    }

    /// Keeps matching tasks and sorts them by this selection's ordering.
    #[must_use]
    pub fn select(self, tasks: impl IntoIterator<Item = InspectionTask>) -> Vec<InspectionTask> {
        let mut selected: Vec<InspectionTask> =
            tasks.into_iter().filter(|task| self.matches(task)).collect();
        selected.sort_by(|left, right| self.compare(left, right));
        selected
    }
}

impl TryFrom<&str> for InspectionTaskFilter {
    type Error = InspectionDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(InspectionDomainError::InvalidFilter(value.to_owned())),
        }
    }
}

fn nulls_last(
    left: Option<DateTime<Utc>>,
    right: Option<DateTime<Utc>>,
    order: impl Fn(&DateTime<Utc>, &DateTime<Utc>) -> Ordering,
) -> Ordering {
    match (left, right) {
        (Some(l), Some(r)) => order(&l, &r),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
