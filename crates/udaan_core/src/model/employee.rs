//! Employee talent record.
//!
//! # Responsibility
//! - Define the per-employee shape rendered by every dashboard.
//! - Keep IDP status and readiness as closed enums.
//!
//! # Invariants
//! - `nine_box_position` axes are expected in `1..=3` but are not rejected;
//!   out-of-range records simply never land in a matrix cell.
//! - `overall_progress` must be within `0..=100`.
//! - Competency scores are conventionally `0..=10` and are never clamped.

use crate::model::ids::{EmployeeId, UserId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Competency name to score, in declaration order.
pub type CompetencyScores = IndexMap<String, i32>;

/// Development plan approval state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdpStatus {
    Draft,
    ManagerApproved,
    CommitteeApproved,
    PendingRevision,
}

impl IdpStatus {
    pub const ALL: [IdpStatus; 4] = [
        IdpStatus::Draft,
        IdpStatus::ManagerApproved,
        IdpStatus::CommitteeApproved,
        IdpStatus::PendingRevision,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::ManagerApproved => "manager_approved",
            Self::CommitteeApproved => "committee_approved",
            Self::PendingRevision => "pending_revision",
        }
    }
}

/// Coarse estimate of time until the employee could take the target role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadinessLevel {
    #[serde(rename = "Ready Now")]
    ReadyNow,
    #[serde(rename = "1 Year")]
    OneYear,
    #[serde(rename = "3 Years")]
    ThreeYears,
}

impl ReadinessLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::ReadyNow => "Ready Now",
            Self::OneYear => "1 Year",
            Self::ThreeYears => "3 Years",
        }
    }
}

/// Raw 9-box coordinates as recorded on the employee.
///
/// Values are kept unvalidated so that bad input data stays visible to the
/// matrix bucketing, which drops (and reports) anything outside `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NineBoxPosition {
    pub performance: i32,
    pub potential: i32,
}

impl NineBoxPosition {
    pub fn new(performance: i32, potential: i32) -> Self {
        Self {
            performance,
            potential,
        }
    }
}

/// Manager appraisal input, each field scored `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppraisalScores {
    pub quality_of_work: i32,
    pub dependability: i32,
    pub initiative: i32,
    pub collaboration: i32,
    pub leadership: i32,
}

/// Employee record as shipped in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub title: String,
    pub department: String,
    /// Weak reference to the owning manager user.
    pub manager_id: UserId,
    pub nine_box_position: NineBoxPosition,
    pub competencies: CompetencyScores,
    pub target_role: String,
    pub overall_progress: u32,
    pub idp_status: IdpStatus,
    pub readiness_level: ReadinessLevel,
    /// `None` until the manager has submitted appraisal input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appraisal_scores: Option<AppraisalScores>,
}

impl Employee {
    /// Score for one competency; missing competencies count as `0`.
    pub fn competency_score(&self, competency: &str) -> i32 {
        self.competencies.get(competency).copied().unwrap_or(0)
    }

    /// First character of the display name, used for avatar initials.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }

    pub fn has_appraisal_input(&self) -> bool {
        self.appraisal_scores.is_some()
    }

    /// Validates record-level invariants.
    ///
    /// Matrix coordinates are deliberately not checked here.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        if self.id.is_blank() {
            return Err(EmployeeValidationError::BlankId);
        }
        if self.name.trim().is_empty() {
            return Err(EmployeeValidationError::BlankName(self.id.clone()));
        }
        if self.overall_progress > 100 {
            return Err(EmployeeValidationError::ProgressOutOfRange {
                employee_id: self.id.clone(),
                progress: self.overall_progress,
            });
        }
        Ok(())
    }
}

/// Record-level validation failures for [`Employee`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeValidationError {
    BlankId,
    BlankName(EmployeeId),
    ProgressOutOfRange {
        employee_id: EmployeeId,
        progress: u32,
    },
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "employee id must not be blank"),
            Self::BlankName(id) => write!(f, "employee {id} has a blank name"),
            Self::ProgressOutOfRange {
                employee_id,
                progress,
            } => write!(
                f,
                "employee {employee_id} overallProgress ({progress}) must be within 0..=100"
            ),
        }
    }
}

impl Error for EmployeeValidationError {}
