//! Screen controllers and their serializable view-models.
//!
//! # Responsibility
//! - Hold per-screen state and change it only through named event methods.
//! - Render immutable view-models a UI shell draws without extra logic.
//!
//! # Invariants
//! - Rendering is a pure function of controller state and the directory.
//! - No controller writes to the dataset.

pub mod app;
pub mod cards;
pub mod employee_dashboard;
pub mod error;
pub mod hr_dashboard;
pub mod landing;
pub mod login;
pub mod manager_dashboard;
pub mod navigation;
pub mod screens;
pub mod signup;
