//! Application shell.
//!
//! # Responsibility
//! - Own the current page, the session user and every screen controller.
//! - Build the role dashboard on login and drop it on logout.
//!
//! # Invariants
//! - A dashboard page is only shown when the session user has that role;
//!   otherwise the login screen is rendered.
//! - Logout clears the session and returns to landing.

use crate::model::ids::EmployeeId;
use crate::model::user::{User, UserRole};
use crate::repo::directory_repo::DirectoryRepository;
use crate::view::employee_dashboard::{EmployeeDashboard, EmployeeScreen};
use crate::view::hr_dashboard::{HrDashboard, HrScreen};
use crate::view::landing::{LandingAction, LandingPage, LandingView};
use crate::view::login::{LoginForm, LoginView};
use crate::view::manager_dashboard::{ManagerDashboard, ManagerScreen};
use crate::view::navigation::Page;
use crate::view::signup::{SignupError, SignupForm, SignupOutcome, SignupView};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Role dashboard controller bound to the session user.
pub enum Dashboard<D: DirectoryRepository> {
    Hr(HrDashboard<D>),
    Manager(ManagerDashboard<D>),
    Employee(EmployeeDashboard<D>),
}

impl<D: DirectoryRepository> Dashboard<D> {
    fn for_user(directory: Arc<D>, user: &User) -> Self {
        match user.role {
            UserRole::Hr => Self::Hr(HrDashboard::new(directory)),
            UserRole::Manager => Self::Manager(ManagerDashboard::new(directory, user.id.clone())),
            UserRole::Employee => {
                Self::Employee(EmployeeDashboard::new(directory, EmployeeId::from(&user.id)))
            }
        }
    }

    pub fn role(&self) -> UserRole {
        match self {
            Self::Hr(_) => UserRole::Hr,
            Self::Manager(_) => UserRole::Manager,
            Self::Employee(_) => UserRole::Employee,
        }
    }
}

/// Rendered page, tagged by page kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "screen", content = "model", rename_all = "snake_case")]
pub enum Screen {
    Landing(LandingView),
    Login(LoginView),
    Signup(SignupView),
    HrDashboard(HrScreen),
    ManagerDashboard(ManagerScreen),
    EmployeeDashboard(EmployeeScreen),
}

impl Screen {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Landing(_) => "landing",
            Self::Login(_) => "login",
            Self::Signup(_) => "signup",
            Self::HrDashboard(_) => "hr_dashboard",
            Self::ManagerDashboard(_) => "manager_dashboard",
            Self::EmployeeDashboard(_) => "employee_dashboard",
        }
    }
}

pub struct App<D: DirectoryRepository> {
    directory: Arc<D>,
    page: Page,
    session: Option<User>,
    landing: LandingPage,
    login: LoginForm,
    signup: SignupForm,
    dashboard: Option<Dashboard<D>>,
}

impl<D: DirectoryRepository> App<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self {
            directory,
            page: Page::Landing,
            session: None,
            landing: LandingPage::default(),
            login: LoginForm::new(),
            signup: SignupForm::new(),
            dashboard: None,
        }
    }

    pub fn directory(&self) -> &D {
        self.directory.as_ref()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn session(&self) -> Option<&User> {
        self.session.as_ref()
    }

    pub fn landing_mut(&mut self) -> &mut LandingPage {
        &mut self.landing
    }

    pub fn login_mut(&mut self) -> &mut LoginForm {
        &mut self.login
    }

    pub fn signup_mut(&mut self) -> &mut SignupForm {
        &mut self.signup
    }

    pub fn dashboard(&self) -> Option<&Dashboard<D>> {
        self.dashboard.as_ref()
    }

    pub fn hr_mut(&mut self) -> Option<&mut HrDashboard<D>> {
        match self.dashboard.as_mut() {
            Some(Dashboard::Hr(dashboard)) => Some(dashboard),
            _ => None,
        }
    }

    pub fn manager_mut(&mut self) -> Option<&mut ManagerDashboard<D>> {
        match self.dashboard.as_mut() {
            Some(Dashboard::Manager(dashboard)) => Some(dashboard),
            _ => None,
        }
    }

    /// Sets the current page. Dashboard pages for another role than the
    /// session user's are redirected to login.
    pub fn navigate(&mut self, page: Page) {
        let page = match page {
            Page::Dashboard(role) if self.session_role() != Some(role) => {
                warn!(
                    "event=navigate module=app status=warn reason=no_session page={}",
                    page.token()
                );
                Page::Login
            }
            other => other,
        };
        self.page = page;
    }

    /// Landing nav button or call-to-action.
    pub fn landing_action(&mut self, action: LandingAction) {
        let target = self.landing.activate(action);
        self.navigate(target);
    }

    pub fn submit_login(&mut self) -> &User {
        let user = self.login.submit();
        self.complete_login(user)
    }

    pub fn quick_login(&mut self, role: UserRole) -> &User {
        self.complete_login(LoginForm::quick_login(role))
    }

    /// Starts a session for `user` and opens the dashboard for their role.
    pub fn complete_login(&mut self, user: User) -> &User {
        info!(
            "event=login module=app status=ok user_id={} role={}",
            user.id,
            user.role.as_str()
        );
        self.dashboard = Some(Dashboard::for_user(Arc::clone(&self.directory), &user));
        self.page = Page::Dashboard(user.role);
        self.login = LoginForm::new();
        self.session.insert(user)
    }

    /// Submits signup; success moves to the login page.
    pub fn submit_signup(&mut self) -> Result<SignupOutcome, SignupError> {
        let outcome = self.signup.submit()?;
        self.signup = SignupForm::new();
        self.navigate(outcome.next);
        Ok(outcome)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.session.take() {
            info!("event=logout module=app status=ok user_id={}", user.id);
        }
        self.dashboard = None;
        self.page = Page::Landing;
    }

    pub fn screen(&self) -> Screen {
        match self.page {
            Page::Landing => Screen::Landing(self.landing.render()),
            Page::Login => Screen::Login(self.login.render()),
            Page::Signup => Screen::Signup(self.signup.render()),
            Page::Dashboard(role) => match (&self.dashboard, self.session_role()) {
                (Some(Dashboard::Hr(dashboard)), Some(UserRole::Hr)) if role == UserRole::Hr => {
                    Screen::HrDashboard(dashboard.render())
                }
                (Some(Dashboard::Manager(dashboard)), Some(UserRole::Manager))
                    if role == UserRole::Manager =>
                {
                    Screen::ManagerDashboard(dashboard.render())
                }
                (Some(Dashboard::Employee(dashboard)), Some(UserRole::Employee))
                    if role == UserRole::Employee =>
                {
                    Screen::EmployeeDashboard(dashboard.render())
                }
                _ => Screen::Login(self.login.render()),
            },
        }
    }

    fn session_role(&self) -> Option<UserRole> {
        self.session.as_ref().map(|user| user.role)
    }
}
