//! Small presentational view-models shared by the dashboards.

use crate::model::employee::IdpStatus;
use serde::{Deserialize, Serialize};

/// One KPI tile: caption, formatted value and accent color family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiCard {
    pub label: String,
    pub value: String,
    pub tone: String,
}

impl KpiCard {
    pub fn new(label: &str, value: impl ToString, tone: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            tone: tone.to_string(),
        }
    }
}

/// Pill badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
    /// `None` renders the outlined variant.
    pub tone: Option<String>,
}

impl Badge {
    pub fn filled(label: impl Into<String>, tone: &str) -> Self {
        Self {
            label: label.into(),
            tone: Some(tone.to_string()),
        }
    }

    pub fn outlined(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tone: None,
        }
    }

    /// Manager-facing badge for an IDP status.
    pub fn for_team_status(status: IdpStatus) -> Self {
        match status {
            IdpStatus::Draft => Self::filled("Needs Review", "orange"),
            IdpStatus::ManagerApproved => Self::filled("Approved", "green"),
            IdpStatus::CommitteeApproved => Self::filled("Committee Approved", "blue"),
            IdpStatus::PendingRevision => Self::outlined("Draft"),
        }
    }
}
