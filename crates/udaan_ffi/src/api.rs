//! FFI use-case API for the Flutter shell.
//!
//! # Responsibility
//! - Expose app events and the rendered screen to Dart via FRB.
//! - Own the single process-wide `App` instance.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every event returns the screen rendered after the event, as JSON.
//! - The dataset is resolved once; `UDAANSETU_DATASET_PATH` replaces the
//!   built-in fixture when set and non-blank.

use log::{error, info, warn};
use once_cell::sync::OnceCell;
use std::sync::{Arc, Mutex};
use udaan_core::matrix::nine_box::CellKey;
use udaan_core::view::landing::{LandingAction, LandingSection};
use udaan_core::view::signup::SignupUserType;
use udaan_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    App, Dataset, EmployeeId, InMemoryDirectory, Page, UserRole,
};

const DATASET_PATH_ENV: &str = "UDAANSETU_DATASET_PATH";

static APP: OnceCell<Mutex<App<InMemoryDirectory>>> = OnceCell::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Screen envelope returned by every app event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenResponse {
    /// Whether the event was accepted.
    pub ok: bool,
    /// Current page token (`landing|login|signup|<role>-dashboard`).
    pub page: String,
    /// Rendered screen as JSON; empty when the app is unavailable.
    pub payload_json: String,
    /// Human-readable message for alerts/diagnostics; empty on plain success.
    pub message: String,
}

/// Renders the current screen without changing state.
#[flutter_rust_bridge::frb(sync)]
pub fn app_screen() -> ScreenResponse {
    dispatch("app_screen", |_| Ok(String::new()))
}

/// Navigates to a page token. Dashboard pages without a matching session
/// end up on login.
#[flutter_rust_bridge::frb(sync)]
pub fn app_navigate(page: String) -> ScreenResponse {
    dispatch("app_navigate", |app| {
        let target = Page::parse(page.as_str()).map_err(|err| err.to_string())?;
        app.navigate(target);
        Ok(String::new())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn landing_toggle_menu() -> ScreenResponse {
    dispatch("landing_toggle_menu", |app| {
        app.landing_mut().toggle_menu();
        Ok(String::new())
    })
}

/// Scrolls to `about|services|faq` and closes the mobile menu.
#[flutter_rust_bridge::frb(sync)]
pub fn landing_scroll_to(section: String) -> ScreenResponse {
    dispatch("landing_scroll_to", |app| {
        let section = LandingSection::parse(section.as_str())
            .ok_or_else(|| format!("unknown landing section `{section}`"))?;
        app.landing_mut().scroll_to(section);
        Ok(String::new())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn landing_toggle_faq(index: u32) -> ScreenResponse {
    dispatch("landing_toggle_faq", |app| {
        app.landing_mut().toggle_faq(index as usize);
        Ok(String::new())
    })
}

/// Landing nav/call-to-action (`home|login|get-started|start-journey|existing-user`).
#[flutter_rust_bridge::frb(sync)]
pub fn landing_action(action: String) -> ScreenResponse {
    dispatch("landing_action", |app| {
        let action = LandingAction::parse(action.as_str())
            .ok_or_else(|| format!("unknown landing action `{action}`"))?;
        app.landing_action(action);
        Ok(String::new())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn login_set_username(value: String) -> ScreenResponse {
    dispatch("login_set_username", |app| {
        app.login_mut().set_username(value);
        Ok(String::new())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn login_set_password(value: String) -> ScreenResponse {
    dispatch("login_set_password", |app| {
        app.login_mut().set_password(value);
        Ok(String::new())
    })
}

/// Submits the login form; always succeeds with one of the demo users.
#[flutter_rust_bridge::frb(sync)]
pub fn login_submit() -> ScreenResponse {
    dispatch("login_submit", |app| {
        let user = app.submit_login();
        Ok(format!("Logged in as {}.", user.name))
    })
}

/// Quick-access login by role token (`hr|manager|employee`).
#[flutter_rust_bridge::frb(sync)]
pub fn login_quick(role: String) -> ScreenResponse {
    dispatch("login_quick", |app| {
        let role =
            UserRole::parse(role.as_str()).ok_or_else(|| format!("unknown role `{role}`"))?;
        let user = app.quick_login(role);
        Ok(format!("Logged in as {}.", user.name))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn logout() -> ScreenResponse {
    dispatch("logout", |app| {
        app.logout();
        Ok(String::new())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn signup_set_username(value: String) -> ScreenResponse {
    dispatch("signup_set_username", |app| {
        app.signup_mut().set_username(value);
        Ok(String::new())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn signup_set_email(value: String) -> ScreenResponse {
    dispatch("signup_set_email", |app| {
        app.signup_mut().set_email(value);
        Ok(String::new())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn signup_set_password(value: String) -> ScreenResponse {
    dispatch("signup_set_password", |app| {
        app.signup_mut().set_password(value);
        Ok(String::new())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn signup_set_confirm_password(value: String) -> ScreenResponse {
    dispatch("signup_set_confirm_password", |app| {
        app.signup_mut().set_confirm_password(value);
        Ok(String::new())
    })
}

/// Selects `hr_admin` or `employee`.
#[flutter_rust_bridge::frb(sync)]
pub fn signup_select_user_type(user_type: String) -> ScreenResponse {
    dispatch("signup_select_user_type", |app| {
        let user_type = SignupUserType::parse(user_type.as_str())
            .ok_or_else(|| format!("unknown user type `{user_type}`"))?;
        app.signup_mut().select_user_type(user_type);
        Ok(String::new())
    })
}

/// Submits signup. A rejected submit returns `ok=false` with the alert text.
#[flutter_rust_bridge::frb(sync)]
pub fn signup_submit() -> ScreenResponse {
    dispatch("signup_submit", |app| {
        app.submit_signup()
            .map(|outcome| outcome.message)
            .map_err(|err| err.to_string())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn hr_open_data_upload() -> ScreenResponse {
    dispatch("hr_open_data_upload", |app| {
        hr(app)?.open_data_upload();
        Ok(String::new())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn hr_open_success_profiles() -> ScreenResponse {
    dispatch("hr_open_success_profiles", |app| {
        hr(app)?.open_success_profiles();
        Ok(String::new())
    })
}

/// Selects the matrix cell at `(performance, potential)`, each in `1..=3`.
#[flutter_rust_bridge::frb(sync)]
pub fn hr_select_cell(performance: i32, potential: i32) -> ScreenResponse {
    dispatch("hr_select_cell", |app| {
        let key = CellKey::from_scores(performance, potential).ok_or_else(|| {
            format!("cell ({performance}, {potential}) is outside the 3x3 grid")
        })?;
        hr(app)?.select_cell(key);
        Ok(String::new())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn hr_clear_selection() -> ScreenResponse {
    dispatch("hr_clear_selection", |app| {
        hr(app)?.clear_selection();
        Ok(String::new())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn hr_open_employee(employee_id: String) -> ScreenResponse {
    dispatch("hr_open_employee", |app| {
        hr(app)?
            .open_employee(&EmployeeId::new(employee_id))
            .map_err(|err| err.to_string())?;
        Ok(String::new())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn hr_back() -> ScreenResponse {
    dispatch("hr_back", |app| {
        hr(app)?.back();
        Ok(String::new())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn manager_open_input(employee_id: String) -> ScreenResponse {
    dispatch("manager_open_input", |app| {
        manager(app)?
            .open_input(&EmployeeId::new(employee_id))
            .map_err(|err| err.to_string())?;
        Ok(String::new())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn manager_open_approval(employee_id: String) -> ScreenResponse {
    dispatch("manager_open_approval", |app| {
        manager(app)?
            .open_approval(&EmployeeId::new(employee_id))
            .map_err(|err| err.to_string())?;
        Ok(String::new())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn manager_submit_input() -> ScreenResponse {
    dispatch("manager_submit_input", |app| {
        manager(app)?.submit_input();
        Ok("Input submitted.".to_string())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn manager_approve() -> ScreenResponse {
    dispatch("manager_approve", |app| {
        manager(app)?.approve();
        Ok("IDP approved.".to_string())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn manager_back() -> ScreenResponse {
    dispatch("manager_back", |app| {
        manager(app)?.back();
        Ok(String::new())
    })
}

fn hr(
    app: &mut App<InMemoryDirectory>,
) -> Result<&mut udaan_core::view::hr_dashboard::HrDashboard<InMemoryDirectory>, String> {
    app.hr_mut()
        .ok_or_else(|| "HR dashboard is not active".to_string())
}

fn manager(
    app: &mut App<InMemoryDirectory>,
) -> Result<&mut udaan_core::view::manager_dashboard::ManagerDashboard<InMemoryDirectory>, String>
{
    app.manager_mut()
        .ok_or_else(|| "manager dashboard is not active".to_string())
}

/// Runs one event against the shared app and renders the result.
///
/// A rejected event leaves state unchanged, except that a rejected signup
/// submit records its alert on the form. The current screen is returned
/// either way so the shell can redraw.
///
/// A lock poisoned by an earlier panic is recovered and cleared, so one
/// failed event does not lock out the rest of the session.
fn dispatch(
    operation: &str,
    event: impl FnOnce(&mut App<InMemoryDirectory>) -> Result<String, String>,
) -> ScreenResponse {
    let cell = match shared_app() {
        Ok(cell) => cell,
        Err(message) => return unavailable(operation, message),
    };
    let mut app = cell.lock().unwrap_or_else(|poisoned| {
        warn!("event={operation} module=ffi status=recovered reason=lock_poisoned");
        cell.clear_poison();
        poisoned.into_inner()
    });

    let (ok, message) = match event(&mut *app) {
        Ok(message) => (true, message),
        Err(message) => {
            info!("event={operation} module=ffi status=rejected reason={message}");
            (false, message)
        }
    };
    match serde_json::to_string(&app.screen()) {
        Ok(payload_json) => ScreenResponse {
            ok,
            page: app.page().token().to_string(),
            payload_json,
            message,
        },
        Err(err) => unavailable(operation, format!("screen serialization failed: {err}")),
    }
}

fn unavailable(operation: &str, message: String) -> ScreenResponse {
    error!("event={operation} module=ffi status=error reason={message}");
    ScreenResponse {
        ok: false,
        page: String::new(),
        payload_json: String::new(),
        message: format!("{operation} failed: {message}"),
    }
}

fn shared_app() -> Result<&'static Mutex<App<InMemoryDirectory>>, String> {
    APP.get_or_try_init(|| {
        let dataset = resolve_dataset()?;
        Ok(Mutex::new(App::new(Arc::new(InMemoryDirectory::new(dataset)))))
    })
}

fn resolve_dataset() -> Result<Dataset, String> {
    match std::env::var(DATASET_PATH_ENV) {
        Ok(raw) if !raw.trim().is_empty() => Dataset::load_json_file(raw.trim())
            .map_err(|err| format!("dataset load failed: {err}")),
        _ => Ok(Dataset::fixture()),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        app_navigate, app_screen, core_version, hr_back, hr_clear_selection, hr_open_employee,
        hr_select_cell, init_logging, landing_action, login_quick, login_set_username,
        login_submit, logout, manager_approve, manager_open_approval, manager_open_input, ping,
        shared_app, signup_set_password, signup_submit,
    };
    use std::sync::Mutex;

    // Every test drives the same process-wide app.
    static SERIAL: Mutex<()> = Mutex::new(());

    fn payload(json: &str) -> serde_json::Value {
        serde_json::from_str(json).expect("payload is valid JSON")
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn typed_login_renders_manager_dashboard() {
        let _guard = SERIAL.lock().unwrap_or_else(|poison| poison.into_inner());
        logout();
        login_set_username("manager".to_string());
        let response = login_submit();
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.page, "manager-dashboard");

        let screen = payload(&response.payload_json);
        assert_eq!(screen["screen"], "manager_dashboard");
        assert_eq!(screen["model"]["view"], "overview");
        assert_eq!(screen["model"]["model"]["kpis"]["team_size"], 5);
        logout();
    }

    #[test]
    fn manager_events_are_scoped_to_team() {
        let _guard = SERIAL.lock().unwrap_or_else(|poison| poison.into_inner());
        login_quick("manager".to_string());

        let rejected = manager_open_input("999".to_string());
        assert!(!rejected.ok);
        assert!(rejected.message.contains("999"));

        assert!(manager_open_approval("4".to_string()).ok);
        let approved = manager_approve();
        assert!(approved.ok);
        assert_eq!(payload(&approved.payload_json)["model"]["view"], "overview");
        logout();
    }

    #[test]
    fn hr_selection_and_back() {
        let _guard = SERIAL.lock().unwrap_or_else(|poison| poison.into_inner());
        login_quick("hr".to_string());

        assert!(!hr_select_cell(4, 1).ok);
        let selected = hr_select_cell(3, 3);
        assert!(selected.ok);
        let screen = payload(&selected.payload_json);
        assert!(!screen["model"]["model"]["selected_cell"].is_null());

        let cleared = hr_clear_selection();
        assert!(payload(&cleared.payload_json)["model"]["model"]["selected_cell"].is_null());

        assert!(hr_open_employee("3".to_string()).ok);
        let back = hr_back();
        assert_eq!(payload(&back.payload_json)["model"]["view"], "overview");
        logout();
    }

    #[test]
    fn hr_events_require_hr_session() {
        let _guard = SERIAL.lock().unwrap_or_else(|poison| poison.into_inner());
        logout();
        let response = hr_select_cell(1, 1);
        assert!(!response.ok);
        assert_eq!(response.page, "landing");
    }

    #[test]
    fn dashboard_without_session_redirects_to_login() {
        let _guard = SERIAL.lock().unwrap_or_else(|poison| poison.into_inner());
        logout();
        let response = app_navigate("hr-dashboard".to_string());
        assert!(response.ok);
        assert_eq!(response.page, "login");
        assert!(!app_navigate("nowhere".to_string()).ok);
    }

    #[test]
    fn signup_rejection_carries_alert() {
        let _guard = SERIAL.lock().unwrap_or_else(|poison| poison.into_inner());
        logout();
        assert_eq!(landing_action("get-started".to_string()).page, "signup");
        signup_set_password("short".to_string());
        let response = signup_submit();
        assert!(!response.ok);
        assert_eq!(app_screen().page, "signup");
        let screen = payload(&response.payload_json);
        assert!(screen["model"]["password_warning"].is_string());
        assert_eq!(screen["model"]["alert"].as_str(), Some(response.message.as_str()));
    }

    #[test]
    fn panicked_event_does_not_lock_out_later_calls() {
        let _guard = SERIAL.lock().unwrap_or_else(|poison| poison.into_inner());
        let cell = shared_app().expect("fixture app");
        let crashed = std::thread::spawn(move || {
            let _app = cell.lock();
            panic!("event panicked while holding the app");
        })
        .join();
        assert!(crashed.is_err());
        assert!(cell.is_poisoned());

        let response = login_quick("hr".to_string());
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.page, "hr-dashboard");
        assert!(!cell.is_poisoned());
        logout();
    }
}
