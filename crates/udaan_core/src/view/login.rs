//! Demo login form.
//!
//! There is no authentication: the typed username picks one of the three
//! demo users and the password is ignored.

use crate::dataset::fixture::demo_user;
use crate::model::user::{User, UserRole};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAccessButton {
    pub role: UserRole,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginView {
    pub title: String,
    pub subtitle: String,
    pub username: String,
    pub has_password: bool,
    pub quick_access: Vec<QuickAccessButton>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Resolves the typed username to a demo user.
    ///
    /// `hr`/`admin` select HR, `manager`/`rajesh` select the manager, and any
    /// other value (including empty) selects the employee. Matching is exact.
    pub fn submit(&self) -> User {
        demo_user(role_for_username(self.username.as_str()))
    }

    pub fn quick_login(role: UserRole) -> User {
        demo_user(role)
    }

    pub fn render(&self) -> LoginView {
        LoginView {
            title: "UdaanSetu".to_string(),
            subtitle: "Intelligent IDP Recommendation System".to_string(),
            username: self.username.clone(),
            has_password: !self.password.is_empty(),
            quick_access: UserRole::ALL
                .into_iter()
                .map(|role| QuickAccessButton {
                    role,
                    label: role.display_name().to_string(),
                })
                .collect(),
        }
    }
}

pub fn role_for_username(username: &str) -> UserRole {
    match username {
        "hr" | "admin" => UserRole::Hr,
        "manager" | "rajesh" => UserRole::Manager,
        _ => UserRole::Employee,
    }
}

#[cfg(test)]
mod tests {
    use super::{role_for_username, LoginForm};
    use crate::model::user::UserRole;

    #[test]
    fn username_branches() {
        assert_eq!(role_for_username("hr"), UserRole::Hr);
        assert_eq!(role_for_username("admin"), UserRole::Hr);
        assert_eq!(role_for_username("manager"), UserRole::Manager);
        assert_eq!(role_for_username("rajesh"), UserRole::Manager);
        assert_eq!(role_for_username("HR"), UserRole::Employee);
        assert_eq!(role_for_username(""), UserRole::Employee);
    }

    #[test]
    fn submit_returns_fully_formed_user() {
        let mut form = LoginForm::new();
        form.set_username("rajesh");
        form.set_password("ignored");
        let user = form.submit();
        assert_eq!(user.id.as_str(), "2");
        assert_eq!(user.name, "Rajesh Kumar");
        assert_eq!(user.department.as_deref(), Some("Operations"));
        assert_eq!(user.title.as_deref(), Some("Department Head"));
    }

    #[test]
    fn quick_login_matches_typed_login() {
        let mut form = LoginForm::new();
        form.set_username("hr");
        assert_eq!(form.submit(), LoginForm::quick_login(UserRole::Hr));
        assert_eq!(form.render().quick_access.len(), 3);
    }
}
