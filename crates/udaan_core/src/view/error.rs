//! Errors from dashboard event handlers.

use crate::model::ids::{EmployeeId, UserId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected navigation inside a dashboard; state is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Employee id does not resolve in the directory.
    UnknownEmployee(EmployeeId),
    /// Employee exists but reports to another manager.
    NotInTeam {
        manager_id: UserId,
        employee_id: EmployeeId,
    },
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownEmployee(id) => write!(f, "employee not found: {id}"),
            Self::NotInTeam {
                manager_id,
                employee_id,
            } => write!(
                f,
                "employee {employee_id} is not in the team of manager {manager_id}"
            ),
        }
    }
}

impl Error for ViewError {}
