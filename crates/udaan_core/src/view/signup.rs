//! Signup form.
//!
//! # Responsibility
//! - Hold signup field state and the weak-password hint.
//! - Check required fields, email shape, password confirmation and user
//!   type selection on submit.
//!
//! # Invariants
//! - Nothing is persisted; a successful submit only navigates to login.
//! - Checks run in a fixed order and the first failure is reported.

use crate::view::navigation::Page;
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MIN_PASSWORD_CHARS: usize = 8;
pub const SIGNUP_SUCCESS_MESSAGE: &str = "Account created successfully! Please login.";

// Same shape browsers accept for `<input type="email">`.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("valid email regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupUserType {
    HrAdmin,
    Employee,
}

impl SignupUserType {
    pub const ALL: [SignupUserType; 2] = [SignupUserType::HrAdmin, SignupUserType::Employee];

    pub fn label(self) -> &'static str {
        match self {
            Self::HrAdmin => "HR Admin",
            Self::Employee => "Employee",
        }
    }

    /// Accepts `hr_admin`/`hr-admin` and `employee`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "hr_admin" => Some(Self::HrAdmin),
            "employee" => Some(Self::Employee),
            _ => None,
        }
    }
}

/// Blocking signup failures, surfaced to the user as alerts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    MissingField(&'static str),
    InvalidEmail,
    PasswordMismatch,
    MissingUserType,
}

impl Display for SignupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Please fill in the {field} field"),
            Self::InvalidEmail => write!(f, "Please enter a valid email address"),
            Self::PasswordMismatch => write!(f, "Passwords do not match!"),
            Self::MissingUserType => write!(f, "Please select a user type"),
        }
    }
}

impl Error for SignupError {}

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupOutcome {
    pub message: String,
    pub next: Page,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTypeOption {
    pub user_type: SignupUserType,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupView {
    pub title: String,
    pub subtitle: String,
    pub username: String,
    pub email: String,
    pub password_warning: Option<String>,
    pub user_types: Vec<UserTypeOption>,
    /// Last blocking alert, cleared on the next successful submit.
    pub alert: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    username: String,
    email: String,
    password: String,
    confirm_password: String,
    user_type: Option<SignupUserType>,
    show_password_warning: bool,
    alert: Option<String>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Updates the password and re-evaluates the weak-password hint.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.show_password_warning = self.password.chars().count() < MIN_PASSWORD_CHARS;
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.confirm_password = value.into();
    }

    pub fn select_user_type(&mut self, user_type: SignupUserType) {
        self.user_type = Some(user_type);
    }

    pub fn user_type(&self) -> Option<SignupUserType> {
        self.user_type
    }

    pub fn shows_password_warning(&self) -> bool {
        self.show_password_warning
    }

    pub fn submit(&mut self) -> Result<SignupOutcome, SignupError> {
        let result = self.check();
        match &result {
            Ok(_) => {
                self.alert = None;
                info!(
                    "event=signup_submit module=signup status=ok user_type={}",
                    self.user_type.map(SignupUserType::label).unwrap_or("none")
                );
            }
            Err(err) => {
                self.alert = Some(err.to_string());
                info!("event=signup_submit module=signup status=rejected reason={err}");
            }
        }
        result
    }

    /// Close button target.
    pub fn close(&self) -> Page {
        Page::Landing
    }

    /// "Login here" link target.
    pub fn go_to_login(&self) -> Page {
        Page::Login
    }

    pub fn render(&self) -> SignupView {
        SignupView {
            title: "Create Account".to_string(),
            subtitle: "Sign up to continue.".to_string(),
            username: self.username.clone(),
            email: self.email.clone(),
            password_warning: self
                .show_password_warning
                .then(|| "Password looks weak (min 8 characters)".to_string()),
            user_types: SignupUserType::ALL
                .into_iter()
                .map(|user_type| UserTypeOption {
                    user_type,
                    label: user_type.label().to_string(),
                    selected: self.user_type == Some(user_type),
                })
                .collect(),
            alert: self.alert.clone(),
        }
    }

    fn check(&self) -> Result<SignupOutcome, SignupError> {
        let required = [
            ("username", &self.username),
            ("email", &self.email),
            ("password", &self.password),
            ("confirm password", &self.confirm_password),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(SignupError::MissingField(field));
            }
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(SignupError::InvalidEmail);
        }
        if self.password != self.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }
        if self.user_type.is_none() {
            return Err(SignupError::MissingUserType);
        }
        Ok(SignupOutcome {
            message: SIGNUP_SUCCESS_MESSAGE.to_string(),
            next: Page::Login,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{SignupError, SignupForm, SignupUserType, SIGNUP_SUCCESS_MESSAGE};
    use crate::view::navigation::Page;

    fn filled_form() -> SignupForm {
        let mut form = SignupForm::new();
        form.set_username("anya");
        form.set_email("anya@powergrid.com");
        form.set_password("longenough");
        form.set_confirm_password("longenough");
        form
    }

    #[test]
    fn mismatched_passwords_block_submit() {
        let mut form = filled_form();
        form.select_user_type(SignupUserType::Employee);
        form.set_confirm_password("different1");
        assert_eq!(form.submit(), Err(SignupError::PasswordMismatch));
        assert_eq!(
            form.render().alert.as_deref(),
            Some("Passwords do not match!")
        );
    }

    #[test]
    fn missing_user_type_blocks_submit() {
        let mut form = filled_form();
        let err = form.submit().expect_err("user type required");
        assert_eq!(err.to_string(), "Please select a user type");
    }

    #[test]
    fn password_mismatch_is_checked_before_user_type() {
        let mut form = filled_form();
        form.set_confirm_password("other-value");
        assert_eq!(form.submit(), Err(SignupError::PasswordMismatch));
    }

    #[test]
    fn successful_submit_navigates_to_login() {
        let mut form = filled_form();
        form.select_user_type(SignupUserType::HrAdmin);
        let outcome = form.submit().expect("valid signup");
        assert_eq!(outcome.message, SIGNUP_SUCCESS_MESSAGE);
        assert_eq!(outcome.next, Page::Login);
        assert!(form.render().alert.is_none());
    }

    #[test]
    fn weak_password_hint_tracks_length() {
        let mut form = SignupForm::new();
        assert!(!form.shows_password_warning());
        form.set_password("short");
        assert!(form.render().password_warning.is_some());
        form.set_password("12345678");
        assert!(form.render().password_warning.is_none());
    }

    #[test]
    fn required_fields_and_email_shape() {
        let mut form = filled_form();
        form.set_username("   ");
        assert_eq!(form.submit(), Err(SignupError::MissingField("username")));

        let mut form = filled_form();
        form.set_email("not-an-email");
        assert_eq!(form.submit(), Err(SignupError::InvalidEmail));
    }

    #[test]
    fn close_and_login_link_targets() {
        let form = SignupForm::new();
        assert_eq!(form.close(), Page::Landing);
        assert_eq!(form.go_to_login(), Page::Login);
    }
}
