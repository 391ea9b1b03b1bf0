//! IDP activity model.
//!
//! # Responsibility
//! - Define one development activity attached to an employee plan.
//! - Reconcile activity `status` with its `progress` value.
//!
//! # Invariants
//! - `progress` is within `0..=100`.
//! - `status == Completed` iff `progress == 100`.
//! - `status == NotStarted` iff `progress == 0`.
//! - `status == InProgress` implies `1..=99`.
//! - `target_date` is shaped `YYYY-MM-DD`.

use crate::model::ids::{ActivityId, EmployeeId};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static TARGET_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").expect("valid date regex")
});

/// Kind of development activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Training,
    Rotation,
    Mentorship,
    Project,
}

impl ActivityType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Training => "training",
            Self::Rotation => "rotation",
            Self::Mentorship => "mentorship",
            Self::Project => "project",
        }
    }
}

/// Execution state of a development activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ActivityStatus {
    pub const ALL: [ActivityStatus; 3] = [
        ActivityStatus::NotStarted,
        ActivityStatus::InProgress,
        ActivityStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Returns whether `progress` is consistent with this status.
    pub fn admits_progress(self, progress: u32) -> bool {
        match self {
            Self::NotStarted => progress == 0,
            Self::InProgress => (1..=99).contains(&progress),
            Self::Completed => progress == 100,
        }
    }
}

/// One development activity in an employee's plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdpActivity {
    pub id: ActivityId,
    pub employee_id: EmployeeId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub description: String,
    pub status: ActivityStatus,
    pub progress: u32,
    pub target_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl IdpActivity {
    /// Validates progress range, status reconciliation and date shape.
    pub fn validate(&self) -> Result<(), ActivityValidationError> {
        if self.id.is_blank() {
            return Err(ActivityValidationError::BlankId);
        }
        if self.progress > 100 {
            return Err(ActivityValidationError::ProgressOutOfRange {
                activity_id: self.id.clone(),
                progress: self.progress,
            });
        }
        if !self.status.admits_progress(self.progress) {
            return Err(ActivityValidationError::StatusProgressMismatch {
                activity_id: self.id.clone(),
                status: self.status,
                progress: self.progress,
            });
        }
        if !TARGET_DATE_RE.is_match(self.target_date.as_str()) {
            return Err(ActivityValidationError::InvalidTargetDate {
                activity_id: self.id.clone(),
                value: self.target_date.clone(),
            });
        }
        Ok(())
    }
}

/// Record-level validation failures for [`IdpActivity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityValidationError {
    BlankId,
    ProgressOutOfRange {
        activity_id: ActivityId,
        progress: u32,
    },
    StatusProgressMismatch {
        activity_id: ActivityId,
        status: ActivityStatus,
        progress: u32,
    },
    InvalidTargetDate {
        activity_id: ActivityId,
        value: String,
    },
}

impl Display for ActivityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "activity id must not be blank"),
            Self::ProgressOutOfRange {
                activity_id,
                progress,
            } => write!(
                f,
                "activity {activity_id} progress ({progress}) must be within 0..=100"
            ),
            Self::StatusProgressMismatch {
                activity_id,
                status,
                progress,
            } => write!(
                f,
                "activity {activity_id} status `{}` does not admit progress {progress}",
                status.as_str()
            ),
            Self::InvalidTargetDate { activity_id, value } => write!(
                f,
                "activity {activity_id} targetDate `{value}` must be YYYY-MM-DD"
            ),
        }
    }
}

impl Error for ActivityValidationError {}

#[cfg(test)]
mod tests {
    use super::{ActivityStatus, ActivityType, ActivityValidationError, IdpActivity};

    fn activity(status: ActivityStatus, progress: u32) -> IdpActivity {
        IdpActivity {
            id: "a-test".into(),
            employee_id: "3".into(),
            title: "Course".to_string(),
            kind: ActivityType::Training,
            description: "desc".to_string(),
            status,
            progress,
            target_date: "2025-06-30".to_string(),
            remarks: None,
        }
    }

    #[test]
    fn status_progress_reconciliation() {
        assert!(activity(ActivityStatus::Completed, 100).validate().is_ok());
        assert!(activity(ActivityStatus::NotStarted, 0).validate().is_ok());
        assert!(activity(ActivityStatus::InProgress, 40).validate().is_ok());

        let err = activity(ActivityStatus::Completed, 40)
            .validate()
            .expect_err("completed at 40 must be rejected");
        assert!(matches!(
            err,
            ActivityValidationError::StatusProgressMismatch { progress: 40, .. }
        ));
        assert!(activity(ActivityStatus::InProgress, 100).validate().is_err());
        assert!(activity(ActivityStatus::NotStarted, 5).validate().is_err());
    }

    #[test]
    fn rejects_malformed_target_date() {
        let mut item = activity(ActivityStatus::NotStarted, 0);
        item.target_date = "30/06/2025".to_string();
        let err = item.validate().expect_err("bad date must fail");
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn kind_is_serialized_as_type() {
        let json = serde_json::to_value(activity(ActivityStatus::InProgress, 65))
            .expect("serialize activity");
        assert_eq!(json["type"], "training");
        assert_eq!(json["status"], "in_progress");
        assert_eq!(json["employeeId"], "3");
        assert_eq!(json["targetDate"], "2025-06-30");
        assert!(json.get("remarks").is_none());
    }
}
