//! Domain model for the IDP / succession-planning dashboards.
//!
//! # Responsibility
//! - Define canonical records shared by every dashboard projection.
//! - Replace stringly-typed roles/statuses with closed enums.
//!
//! # Invariants
//! - Records are immutable after load; dashboard actions never write back.
//! - Cross-entity references are typed ids resolved through the directory.

pub mod activity;
pub mod employee;
pub mod ids;
pub mod profile;
pub mod user;
