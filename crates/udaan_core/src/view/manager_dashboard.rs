//! Manager team dashboard controller.
//!
//! # Responsibility
//! - Scope every projection to the employees reporting to one manager.
//! - Own the manager sub-view (overview, appraisal input, IDP approval).
//!
//! # Invariants
//! - Sub-views can only be opened for members of this manager's team.
//! - Submitting input and approving a plan return to the overview without
//!   changing any record.

use crate::chart::progress_ring::ProgressRing;
use crate::kpi::summary::ManagerKpis;
use crate::matrix::nine_box::NineBoxMatrix;
use crate::model::employee::{Employee, IdpStatus};
use crate::model::ids::{EmployeeId, UserId};
use crate::repo::directory_repo::DirectoryRepository;
use crate::view::cards::{Badge, KpiCard};
use crate::view::error::ViewError;
use crate::view::screens::{ApprovalScreen, EmployeeSummary, InputFormScreen};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const TEAM_RING_SIZE: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagerView {
    Overview,
    InputForm(EmployeeId),
    IdpApproval(EmployeeId),
}

/// To-do row with its call-to-action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub employee_id: EmployeeId,
    pub name: String,
    pub subtitle: String,
    pub action_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberRow {
    pub employee_id: EmployeeId,
    pub initial: String,
    pub name: String,
    pub title: String,
    pub target_role: String,
    pub progress: ProgressRing,
    pub progress_label: String,
    pub badge: Badge,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerOverview {
    pub heading: String,
    pub subheading: String,
    pub kpis: ManagerKpis,
    pub kpi_cards: Vec<KpiCard>,
    pub pending_inputs: Vec<TodoItem>,
    pub pending_inputs_empty_message: Option<String>,
    pub pending_reviews: Vec<TodoItem>,
    pub pending_reviews_empty_message: Option<String>,
    /// Team matrix; cells are not selectable on this dashboard.
    pub matrix: NineBoxMatrix,
    pub team: Vec<TeamMemberRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", content = "model", rename_all = "snake_case")]
pub enum ManagerScreen {
    Overview(ManagerOverview),
    InputForm(InputFormScreen),
    IdpApproval(ApprovalScreen),
}

pub struct ManagerDashboard<D: DirectoryRepository> {
    directory: Arc<D>,
    manager_id: UserId,
    view: ManagerView,
}

impl<D: DirectoryRepository> ManagerDashboard<D> {
    pub fn new(directory: Arc<D>, manager_id: UserId) -> Self {
        Self {
            directory,
            manager_id,
            view: ManagerView::Overview,
        }
    }

    pub fn manager_id(&self) -> &UserId {
        &self.manager_id
    }

    pub fn view(&self) -> &ManagerView {
        &self.view
    }

    pub fn team(&self) -> Vec<&Employee> {
        self.directory.employees_by_manager(&self.manager_id)
    }

    /// "Add Input" handler.
    pub fn open_input(&mut self, employee_id: &EmployeeId) -> Result<(), ViewError> {
        self.ensure_in_team(employee_id)?;
        self.view = ManagerView::InputForm(employee_id.clone());
        Ok(())
    }

    /// "Review" handler.
    pub fn open_approval(&mut self, employee_id: &EmployeeId) -> Result<(), ViewError> {
        self.ensure_in_team(employee_id)?;
        self.view = ManagerView::IdpApproval(employee_id.clone());
        Ok(())
    }

    /// Input form submit; the entered values are not kept.
    pub fn submit_input(&mut self) {
        if let ManagerView::InputForm(id) = &self.view {
            info!(
                "event=appraisal_input_submit module=manager_dashboard status=ok employee_id={id}"
            );
        }
        self.back();
    }

    /// Plan approval; the record's status is not changed.
    pub fn approve(&mut self) {
        if let ManagerView::IdpApproval(id) = &self.view {
            info!("event=idp_approve module=manager_dashboard status=ok employee_id={id}");
        }
        self.back();
    }

    pub fn back(&mut self) {
        self.view = ManagerView::Overview;
    }

    pub fn render(&self) -> ManagerScreen {
        let directory = self.directory.as_ref();
        match &self.view {
            ManagerView::Overview => ManagerScreen::Overview(self.overview()),
            ManagerView::InputForm(id) => match directory.employee_by_id(id) {
                Some(employee) => ManagerScreen::InputForm(InputFormScreen {
                    employee: EmployeeSummary::from(employee),
                }),
                None => ManagerScreen::Overview(self.overview()),
            },
            ManagerView::IdpApproval(id) => match directory.employee_by_id(id) {
                Some(employee) => {
                    ManagerScreen::IdpApproval(ApprovalScreen::new(directory, employee))
                }
                None => ManagerScreen::Overview(self.overview()),
            },
        }
    }

    fn ensure_in_team(&self, employee_id: &EmployeeId) -> Result<(), ViewError> {
        let Some(employee) = self.directory.employee_by_id(employee_id) else {
            warn!(
                "event=open_team_member module=manager_dashboard status=error reason=unknown employee_id={employee_id}"
            );
            return Err(ViewError::UnknownEmployee(employee_id.clone()));
        };
        if employee.manager_id != self.manager_id {
            warn!(
                "event=open_team_member module=manager_dashboard status=error reason=not_in_team employee_id={employee_id} manager_id={}",
                self.manager_id
            );
            return Err(ViewError::NotInTeam {
                manager_id: self.manager_id.clone(),
                employee_id: employee_id.clone(),
            });
        }
        Ok(())
    }

    fn overview(&self) -> ManagerOverview {
        let team = self.team();
        let kpis = ManagerKpis::compute(&team);

        let pending_inputs = team
            .iter()
            .filter(|employee| !employee.has_appraisal_input())
            .map(|employee| TodoItem {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                subtitle: employee.title.clone(),
                action_label: "Add Input".to_string(),
            })
            .collect::<Vec<_>>();
        let pending_reviews = team
            .iter()
            .filter(|employee| employee.idp_status == IdpStatus::Draft)
            .map(|employee| TodoItem {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                subtitle: format!("{} → {}", employee.title, employee.target_role),
                action_label: "Review".to_string(),
            })
            .collect::<Vec<_>>();

        ManagerOverview {
            heading: "Team Dashboard".to_string(),
            subheading: "Manage your team's development and succession planning".to_string(),
            kpi_cards: vec![
                KpiCard::new("Team Size", kpis.team_size, "blue"),
                KpiCard::new("Pending Inputs", kpis.pending_inputs, "orange"),
                KpiCard::new("Pending Reviews", kpis.pending_reviews, "yellow"),
                KpiCard::new("Approved IDPs", kpis.approved_idps, "green"),
            ],
            kpis,
            pending_inputs_empty_message: pending_inputs
                .is_empty()
                .then(|| "All appraisals completed! 🎉".to_string()),
            pending_inputs,
            pending_reviews_empty_message: pending_reviews
                .is_empty()
                .then(|| "No pending reviews".to_string()),
            pending_reviews,
            matrix: NineBoxMatrix::build(team.iter().copied(), None),
            team: team.iter().map(|employee| team_row(employee)).collect(),
        }
    }
}

fn team_row(employee: &Employee) -> TeamMemberRow {
    TeamMemberRow {
        employee_id: employee.id.clone(),
        initial: employee.initial().map(String::from).unwrap_or_default(),
        name: employee.name.clone(),
        title: employee.title.clone(),
        target_role: employee.target_role.clone(),
        progress: ProgressRing::with_options(employee.overall_progress, TEAM_RING_SIZE, false),
        progress_label: format!("{}%", employee.overall_progress),
        badge: Badge::for_team_status(employee.idp_status),
    }
}
