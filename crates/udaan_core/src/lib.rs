//! Core domain logic for UdaanSetu.
//! This crate is the single source of truth for talent-matrix, KPI and
//! dashboard rules; shells only forward events and draw view-models.

pub mod chart;
pub mod dataset;
pub mod kpi;
pub mod logging;
pub mod matrix;
pub mod model;
pub mod repo;
pub mod view;

pub use dataset::{Dataset, DatasetError};
pub use kpi::summary::{competency_gaps, CompetencyGap, HrKpis, ManagerKpis, StatusCounts};
pub use logging::{default_log_level, init_logging, logging_status};
pub use matrix::nine_box::{CellKey, CellTier, GridLevel, NineBoxMatrix};
pub use model::employee::{Employee, IdpStatus, ReadinessLevel};
pub use model::ids::{ActivityId, EmployeeId, SuccessProfileId, UserId};
pub use model::user::{User, UserRole};
pub use repo::directory_repo::{DirectoryRepository, InMemoryDirectory};
pub use view::app::{App, Dashboard, Screen};
pub use view::error::ViewError;
pub use view::navigation::Page;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
