//! Employee self-service dashboard.
//!
//! Read-only projection of the logged-in employee's own plan. A user
//! without a matching employee record gets a fallback message instead of
//! a plan.

use crate::chart::progress_ring::ProgressRing;
use crate::chart::radar::RadarChart;
use crate::model::activity::{ActivityStatus, ActivityType, IdpActivity};
use crate::model::employee::{IdpStatus, ReadinessLevel};
use crate::model::ids::{ActivityId, EmployeeId};
use crate::repo::directory_repo::DirectoryRepository;
use crate::view::cards::{Badge, KpiCard};
use crate::view::screens::target_radar;
use log::warn;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const NO_PLAN_MESSAGE: &str = "No development plan found for your account.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRow {
    pub id: ActivityId,
    pub title: String,
    pub kind: ActivityType,
    pub status: ActivityStatus,
    pub progress: u32,
    pub progress_label: String,
    pub target_date: String,
    pub remarks: Option<String>,
}

impl From<&IdpActivity> for ActivityRow {
    fn from(activity: &IdpActivity) -> Self {
        Self {
            id: activity.id.clone(),
            title: activity.title.clone(),
            kind: activity.kind,
            status: activity.status,
            progress: activity.progress,
            progress_label: format!("{}%", activity.progress),
            target_date: activity.target_date.clone(),
            remarks: activity.remarks.clone(),
        }
    }
}

/// Activity counts per status, in [`ActivityStatus::ALL`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCounts {
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl ActivityCounts {
    pub fn tally<'a>(activities: impl IntoIterator<Item = &'a IdpActivity>) -> Self {
        activities
            .into_iter()
            .fold(Self::default(), |mut counts, activity| {
                match activity.status {
                    ActivityStatus::NotStarted => counts.not_started += 1,
                    ActivityStatus::InProgress => counts.in_progress += 1,
                    ActivityStatus::Completed => counts.completed += 1,
                }
                counts
            })
    }

    pub fn total(&self) -> usize {
        self.not_started + self.in_progress + self.completed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePlan {
    pub heading: String,
    pub subheading: String,
    pub employee_id: EmployeeId,
    pub title: String,
    pub department: String,
    pub target_role: String,
    pub readiness: ReadinessLevel,
    pub readiness_badge: Badge,
    pub idp_status: IdpStatus,
    pub progress: ProgressRing,
    pub radar: Option<RadarChart>,
    pub activity_counts: ActivityCounts,
    pub kpi_cards: Vec<KpiCard>,
    pub activities: Vec<ActivityRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", content = "model", rename_all = "snake_case")]
pub enum EmployeeScreen {
    Plan(EmployeePlan),
    NoPlan { message: String },
}

pub struct EmployeeDashboard<D: DirectoryRepository> {
    directory: Arc<D>,
    employee_id: EmployeeId,
}

impl<D: DirectoryRepository> EmployeeDashboard<D> {
    pub fn new(directory: Arc<D>, employee_id: EmployeeId) -> Self {
        Self {
            directory,
            employee_id,
        }
    }

    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }

    pub fn render(&self) -> EmployeeScreen {
        let directory = self.directory.as_ref();
        let Some(employee) = directory.employee_by_id(&self.employee_id) else {
            warn!(
                "event=employee_plan module=employee_dashboard status=warn reason=no_record employee_id={}",
                self.employee_id
            );
            return EmployeeScreen::NoPlan {
                message: NO_PLAN_MESSAGE.to_string(),
            };
        };

        let activities = directory.activities_by_employee(&employee.id);
        let counts = ActivityCounts::tally(activities.iter().copied());
        EmployeeScreen::Plan(EmployeePlan {
            heading: format!("Welcome, {}", employee.name),
            subheading: "Track your individual development plan".to_string(),
            employee_id: employee.id.clone(),
            title: employee.title.clone(),
            department: employee.department.clone(),
            target_role: employee.target_role.clone(),
            readiness: employee.readiness_level,
            readiness_badge: Badge::outlined(employee.readiness_level.label()),
            idp_status: employee.idp_status,
            progress: ProgressRing::new(employee.overall_progress),
            radar: target_radar(directory, employee),
            kpi_cards: vec![
                KpiCard::new("Activities", counts.total(), "blue"),
                KpiCard::new("In Progress", counts.in_progress, "orange"),
                KpiCard::new("Completed", counts.completed, "green"),
            ],
            activity_counts: counts,
            activities: activities.into_iter().map(ActivityRow::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{EmployeeDashboard, EmployeeScreen, NO_PLAN_MESSAGE};
    use crate::model::ids::EmployeeId;
    use crate::repo::directory_repo::InMemoryDirectory;
    use std::sync::Arc;

    #[test]
    fn fixture_employee_sees_own_plan() {
        let directory = Arc::new(InMemoryDirectory::fixture());
        let dashboard = EmployeeDashboard::new(directory, EmployeeId::from("3"));
        let EmployeeScreen::Plan(plan) = dashboard.render() else {
            panic!("expected plan for employee 3");
        };
        assert_eq!(plan.activities.len(), 5);
        assert_eq!(plan.activity_counts.total(), 5);
        assert_eq!(plan.progress.progress, 65);
        assert!(plan.radar.is_some());
    }

    #[test]
    fn unknown_employee_gets_fallback() {
        let directory = Arc::new(InMemoryDirectory::fixture());
        let dashboard = EmployeeDashboard::new(directory, EmployeeId::from("999"));
        assert_eq!(
            dashboard.render(),
            EmployeeScreen::NoPlan {
                message: NO_PLAN_MESSAGE.to_string()
            }
        );
    }
}
