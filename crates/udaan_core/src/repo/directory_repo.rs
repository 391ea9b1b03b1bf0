//! Directory lookup contracts and in-memory implementation.
//!
//! # Responsibility
//! - Resolve typed ids into records without exposing dataset layout.
//! - Provide the derivation helpers dashboards rely on (team by manager,
//!   activities by employee, profile by role title).
//!
//! # Invariants
//! - Lookups never fail: unknown ids yield `None` or an empty list.
//! - List results keep dataset order.

use crate::dataset::Dataset;
use crate::model::activity::IdpActivity;
use crate::model::employee::Employee;
use crate::model::ids::{EmployeeId, UserId};
use crate::model::profile::SuccessProfile;
use crate::model::user::{User, UserRole};
use log::debug;

/// Read-only lookup service over users, employees, activities and profiles.
pub trait DirectoryRepository {
    fn users(&self) -> &[User];
    fn employees(&self) -> &[Employee];
    fn activities(&self) -> &[IdpActivity];
    fn success_profiles(&self) -> &[SuccessProfile];

    fn user_by_id(&self, id: &UserId) -> Option<&User> {
        self.users().iter().find(|user| &user.id == id)
    }

    fn users_by_role(&self, role: UserRole) -> Vec<&User> {
        self.users().iter().filter(|user| user.role == role).collect()
    }

    fn employee_by_id(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees().iter().find(|employee| &employee.id == id)
    }

    /// Team members whose `manager_id` matches; empty for unknown managers.
    fn employees_by_manager(&self, manager_id: &UserId) -> Vec<&Employee> {
        let team = self
            .employees()
            .iter()
            .filter(|employee| &employee.manager_id == manager_id)
            .collect::<Vec<_>>();
        if team.is_empty() {
            debug!("event=team_lookup module=directory status=empty manager_id={manager_id}");
        }
        team
    }

    fn activities_by_employee(&self, employee_id: &EmployeeId) -> Vec<&IdpActivity> {
        self.activities()
            .iter()
            .filter(|activity| &activity.employee_id == employee_id)
            .collect()
    }

    fn success_profile_by_role(&self, role_title: &str) -> Option<&SuccessProfile> {
        self.success_profiles()
            .iter()
            .find(|profile| profile.role_title == role_title)
    }

    /// Resolves the weak `manager_id` back-reference.
    fn manager_of(&self, employee: &Employee) -> Option<&User> {
        self.user_by_id(&employee.manager_id)
    }
}

/// Directory backed by an owned, immutable [`Dataset`].
#[derive(Debug, Clone)]
pub struct InMemoryDirectory {
    dataset: Dataset,
}

impl InMemoryDirectory {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Directory over the built-in demo dataset.
    pub fn fixture() -> Self {
        Self::new(Dataset::fixture())
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

impl DirectoryRepository for InMemoryDirectory {
    fn users(&self) -> &[User] {
        &self.dataset.users
    }

    fn employees(&self) -> &[Employee] {
        &self.dataset.employees
    }

    fn activities(&self) -> &[IdpActivity] {
        &self.dataset.activities
    }

    fn success_profiles(&self) -> &[SuccessProfile] {
        &self.dataset.success_profiles
    }
}
