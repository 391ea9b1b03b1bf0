//! Top-level page identifiers.
//!
//! A flat label dispatch: there is no history stack and no guard logic here.
//! Dashboard sub-views live inside each dashboard controller and are not
//! reachable from a `Page`.

use crate::model::user::UserRole;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "page", content = "role", rename_all = "snake_case")]
pub enum Page {
    Landing,
    Login,
    Signup,
    Dashboard(UserRole),
}

impl Page {
    /// Stable token used by shells (`landing`, `login`, `signup`,
    /// `hr-dashboard`, `manager-dashboard`, `employee-dashboard`).
    pub fn token(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Dashboard(UserRole::Hr) => "hr-dashboard",
            Self::Dashboard(UserRole::Manager) => "manager-dashboard",
            Self::Dashboard(UserRole::Employee) => "employee-dashboard",
        }
    }

    pub fn parse(token: &str) -> Result<Self, PageParseError> {
        match token.trim() {
            "landing" => Ok(Self::Landing),
            "login" => Ok(Self::Login),
            "signup" => Ok(Self::Signup),
            "hr-dashboard" => Ok(Self::Dashboard(UserRole::Hr)),
            "manager-dashboard" => Ok(Self::Dashboard(UserRole::Manager)),
            "employee-dashboard" => Ok(Self::Dashboard(UserRole::Employee)),
            other => Err(PageParseError(other.to_string())),
        }
    }
}

/// Unknown page token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParseError(pub String);

impl Display for PageParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown page `{}`; expected landing|login|signup|hr-dashboard|manager-dashboard|employee-dashboard",
            self.0
        )
    }
}

impl Error for PageParseError {}

#[cfg(test)]
mod tests {
    use super::Page;
    use crate::model::user::UserRole;

    #[test]
    fn tokens_parse_back_to_pages() {
        let pages = [
            Page::Landing,
            Page::Login,
            Page::Signup,
            Page::Dashboard(UserRole::Hr),
            Page::Dashboard(UserRole::Manager),
            Page::Dashboard(UserRole::Employee),
        ];
        for page in pages {
            assert_eq!(Page::parse(page.token()), Ok(page));
        }
    }

    #[test]
    fn unknown_token_is_rejected() {
        let err = Page::parse("settings").expect_err("unknown page");
        assert!(err.to_string().contains("settings"));
    }
}
