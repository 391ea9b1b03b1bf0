//! Boundary view-models for screens reached from a dashboard.
//!
//! These screens are opaque to the dashboards: each consumes at most one
//! employee record and hands control back through back/submit/approve
//! events on the owning dashboard controller. Submitted values are not
//! threaded back into the dataset.

use crate::chart::progress_ring::ProgressRing;
use crate::chart::radar::RadarChart;
use crate::model::activity::IdpActivity;
use crate::model::employee::{Employee, IdpStatus, ReadinessLevel};
use crate::model::ids::EmployeeId;
use crate::model::profile::{CompetencyComparison, SuccessProfile};
use crate::repo::directory_repo::DirectoryRepository;
use serde::{Deserialize, Serialize};

/// Compact employee card shared by lists and boundary screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub id: EmployeeId,
    pub name: String,
    pub title: String,
    pub department: String,
    pub target_role: String,
    pub readiness: ReadinessLevel,
    pub overall_progress: u32,
    pub idp_status: IdpStatus,
}

impl From<&Employee> for EmployeeSummary {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            name: employee.name.clone(),
            title: employee.title.clone(),
            department: employee.department.clone(),
            target_role: employee.target_role.clone(),
            readiness: employee.readiness_level,
            overall_progress: employee.overall_progress,
            idp_status: employee.idp_status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataUploadScreen {
    pub title: String,
}

impl Default for DataUploadScreen {
    fn default() -> Self {
        Self {
            title: "Upload Data".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessProfilesScreen {
    pub title: String,
    pub profiles: Vec<SuccessProfile>,
}

impl SuccessProfilesScreen {
    pub fn new<D: DirectoryRepository>(directory: &D) -> Self {
        Self {
            title: "Success Profiles".to_string(),
            profiles: directory.success_profiles().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDetailScreen {
    pub employee: Employee,
    pub manager_name: Option<String>,
    pub progress: ProgressRing,
    /// Present when a success profile exists for the target role.
    pub radar: Option<RadarChart>,
    /// Empty when no success profile exists for the target role.
    pub profile_comparison: Vec<CompetencyComparison>,
    pub meets_profile: bool,
    pub activities: Vec<IdpActivity>,
}

impl EmployeeDetailScreen {
    pub fn new<D: DirectoryRepository>(directory: &D, employee: &Employee) -> Self {
        let profile = directory.success_profile_by_role(employee.target_role.as_str());
        Self {
            employee: employee.clone(),
            manager_name: directory.manager_of(employee).map(|user| user.name.clone()),
            progress: ProgressRing::new(employee.overall_progress),
            radar: target_radar(directory, employee),
            profile_comparison: profile
                .map(|profile| profile.compare(employee))
                .unwrap_or_default(),
            meets_profile: profile.is_some_and(|profile| profile.is_met_by(employee)),
            activities: directory
                .activities_by_employee(&employee.id)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

/// Manager appraisal input form. Submit carries no payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFormScreen {
    pub employee: EmployeeSummary,
}

/// Manager review of a draft plan. Approve carries no payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalScreen {
    pub employee: EmployeeSummary,
    pub activities: Vec<IdpActivity>,
}

impl ApprovalScreen {
    pub fn new<D: DirectoryRepository>(directory: &D, employee: &Employee) -> Self {
        Self {
            employee: EmployeeSummary::from(employee),
            activities: directory
                .activities_by_employee(&employee.id)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

/// Radar of the employee against the success profile of their target role.
pub fn target_radar<D: DirectoryRepository>(
    directory: &D,
    employee: &Employee,
) -> Option<RadarChart> {
    directory
        .success_profile_by_role(employee.target_role.as_str())
        .map(|profile| {
            RadarChart::new(
                &employee.competencies,
                &profile.required_competencies,
                Some(format!("Competencies vs {}", profile.role_title)),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::EmployeeDetailScreen;
    use crate::model::ids::EmployeeId;
    use crate::repo::directory_repo::{DirectoryRepository, InMemoryDirectory};

    #[test]
    fn detail_compares_against_target_profile() {
        let directory = InMemoryDirectory::fixture();
        let employee = directory
            .employee_by_id(&EmployeeId::from("3"))
            .expect("fixture employee");
        let detail = EmployeeDetailScreen::new(&directory, employee);

        assert_eq!(detail.profile_comparison.len(), 6);
        assert_eq!(detail.profile_comparison[0].competency, "Strategic Thinking");
        assert_eq!(detail.profile_comparison[0].shortfall, 1);
        assert!(!detail.meets_profile);
        assert_eq!(detail.activities.len(), 5);
    }

    #[test]
    fn detail_without_profile_has_no_comparison() {
        let directory = InMemoryDirectory::fixture();
        let employee = directory
            .employee_by_id(&EmployeeId::from("6"))
            .expect("fixture employee");
        let detail = EmployeeDetailScreen::new(&directory, employee);

        assert!(detail.radar.is_none());
        assert!(detail.profile_comparison.is_empty());
        assert!(!detail.meets_profile);
    }
}
