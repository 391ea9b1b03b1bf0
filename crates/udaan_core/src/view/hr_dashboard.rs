//! HR committee dashboard controller.
//!
//! # Responsibility
//! - Own the HR sub-view and the selected matrix cell.
//! - Compose org-wide KPIs, the 9-box matrix, the approval queue, the
//!   selected-cell panel and the competency gap analysis.
//!
//! # Invariants
//! - `back` is a same-level reset: overview, no selected employee, no
//!   selected cell.
//! - Selection only highlights and cross-filters; it never changes KPIs.

use crate::dataset::fixture::ORG_COMPETENCIES;
use crate::kpi::summary::{competency_gaps, CompetencyGap, HrKpis};
use crate::matrix::nine_box::{employees_in_cell, CellKey, NineBoxMatrix};
use crate::model::employee::{Employee, IdpStatus};
use crate::model::ids::EmployeeId;
use crate::repo::directory_repo::DirectoryRepository;
use crate::view::cards::{Badge, KpiCard};
use crate::view::error::ViewError;
use crate::view::screens::{
    DataUploadScreen, EmployeeDetailScreen, EmployeeSummary, SuccessProfilesScreen,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// HR sub-view; never visible to top-level navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HrView {
    Overview,
    DataUpload,
    SuccessProfiles,
    EmployeeDetail(EmployeeId),
}

/// Approval queue row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueItem {
    pub employee: EmployeeSummary,
    pub target_badge: Badge,
    pub readiness_badge: Badge,
}

/// Selected-cell panel card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellMemberCard {
    pub employee: EmployeeSummary,
    pub target_badge: Badge,
    pub progress_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCellPanel {
    pub key: CellKey,
    pub title: String,
    pub members: Vec<CellMemberCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrOverview {
    pub heading: String,
    pub subheading: String,
    pub actions: Vec<String>,
    pub kpis: HrKpis,
    pub kpi_cards: Vec<KpiCard>,
    pub matrix: NineBoxMatrix,
    pub approval_queue: Vec<QueueItem>,
    pub approval_queue_empty_message: Option<String>,
    /// Shown only when a cell is selected and has members.
    pub selected_cell: Option<SelectedCellPanel>,
    pub competency_gaps: Vec<CompetencyGap>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", content = "model", rename_all = "snake_case")]
pub enum HrScreen {
    Overview(HrOverview),
    DataUpload(DataUploadScreen),
    SuccessProfiles(SuccessProfilesScreen),
    EmployeeDetail(EmployeeDetailScreen),
}

pub struct HrDashboard<D: DirectoryRepository> {
    directory: Arc<D>,
    view: HrView,
    selected_cell: Option<CellKey>,
}

impl<D: DirectoryRepository> HrDashboard<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self {
            directory,
            view: HrView::Overview,
            selected_cell: None,
        }
    }

    pub fn view(&self) -> &HrView {
        &self.view
    }

    pub fn selected_cell(&self) -> Option<CellKey> {
        self.selected_cell
    }

    pub fn open_data_upload(&mut self) {
        self.view = HrView::DataUpload;
    }

    pub fn open_success_profiles(&mut self) {
        self.view = HrView::SuccessProfiles;
    }

    /// Matrix cell-click handler.
    pub fn select_cell(&mut self, key: CellKey) {
        self.selected_cell = Some(key);
    }

    pub fn clear_selection(&mut self) {
        self.selected_cell = None;
    }

    pub fn open_employee(&mut self, employee_id: &EmployeeId) -> Result<(), ViewError> {
        if self.directory.employee_by_id(employee_id).is_none() {
            warn!("event=open_employee module=hr_dashboard status=error employee_id={employee_id}");
            return Err(ViewError::UnknownEmployee(employee_id.clone()));
        }
        info!("event=open_employee module=hr_dashboard status=ok employee_id={employee_id}");
        self.view = HrView::EmployeeDetail(employee_id.clone());
        Ok(())
    }

    /// Returns to the overview and drops every selection.
    pub fn back(&mut self) {
        self.view = HrView::Overview;
        self.selected_cell = None;
    }

    pub fn render(&self) -> HrScreen {
        let directory = self.directory.as_ref();
        match &self.view {
            HrView::Overview => HrScreen::Overview(self.overview()),
            HrView::DataUpload => HrScreen::DataUpload(DataUploadScreen::default()),
            HrView::SuccessProfiles => {
                HrScreen::SuccessProfiles(SuccessProfilesScreen::new(directory))
            }
            HrView::EmployeeDetail(id) => match directory.employee_by_id(id) {
                Some(employee) => {
                    HrScreen::EmployeeDetail(EmployeeDetailScreen::new(directory, employee))
                }
                None => HrScreen::Overview(self.overview()),
            },
        }
    }

    fn overview(&self) -> HrOverview {
        let employees = self.directory.employees().iter().collect::<Vec<_>>();
        let kpis = HrKpis::compute(&employees);

        let approval_queue = employees
            .iter()
            .filter(|employee| employee.idp_status == IdpStatus::ManagerApproved)
            .map(|employee| QueueItem {
                employee: EmployeeSummary::from(*employee),
                target_badge: target_badge(employee),
                readiness_badge: Badge::outlined(employee.readiness_level.label()),
            })
            .collect::<Vec<_>>();
        let approval_queue_empty_message = approval_queue
            .is_empty()
            .then(|| "No pending approvals".to_string());

        let selected_cell = self.selected_cell.and_then(|key| {
            let members = employees_in_cell(employees.iter().copied(), key);
            if members.is_empty() {
                return None;
            }
            Some(SelectedCellPanel {
                key,
                title: format!("Employees in Selected Cell ({})", members.len()),
                members: members
                    .into_iter()
                    .map(|employee| CellMemberCard {
                        employee: EmployeeSummary::from(employee),
                        target_badge: target_badge(employee),
                        progress_label: format!("{}%", employee.overall_progress),
                    })
                    .collect(),
            })
        });

        HrOverview {
            heading: "HR Committee Dashboard".to_string(),
            subheading: "Succession planning oversight and IDP management".to_string(),
            actions: vec!["Upload Data".to_string(), "Success Profiles".to_string()],
            kpi_cards: vec![
                KpiCard::new("Total Pipeline", kpis.total_pipeline, "blue"),
                KpiCard::new("Awaiting Review", kpis.awaiting_review, "orange"),
                KpiCard::new("Approved IDPs", kpis.approved_idps, "green"),
                KpiCard::new("Avg Readiness", format!("{}%", kpis.avg_readiness), "purple"),
            ],
            kpis,
            matrix: NineBoxMatrix::build(employees.iter().copied(), self.selected_cell),
            approval_queue,
            approval_queue_empty_message,
            selected_cell,
            competency_gaps: competency_gaps(&employees, &ORG_COMPETENCIES),
        }
    }
}

fn target_badge(employee: &Employee) -> Badge {
    Badge::filled(format!("→ {}", employee.target_role), "blue")
}
