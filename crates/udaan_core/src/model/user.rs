//! Login-capable user identity.
//!
//! # Responsibility
//! - Define the user record handed to the shell on login completion.
//! - Map the closed role set onto dashboard routing.
//!
//! # Invariants
//! - Role only selects which dashboard is shown; there is no permission
//!   enforcement beyond display routing.

use crate::model::ids::UserId;
use serde::{Deserialize, Serialize};

/// Role tag carried by every user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Hr,
    Manager,
    Employee,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Hr, UserRole::Manager, UserRole::Employee];

    /// Stable wire token (`hr|manager|employee`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hr => "hr",
            Self::Manager => "manager",
            Self::Employee => "employee",
        }
    }

    /// Parses a wire token; surrounding whitespace and case are ignored.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hr" => Some(Self::Hr),
            "manager" => Some(Self::Manager),
            "employee" => Some(Self::Employee),
            _ => None,
        }
    }

    /// Label used on quick-access login buttons.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Hr => "HR Admin",
            Self::Manager => "Manager",
            Self::Employee => "Employee",
        }
    }
}

/// User record produced by login and consumed by the application shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub role: UserRole,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl User {
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        role: UserRole,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            email: email.into(),
            department: None,
            title: None,
        }
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
