//! Read-side repository layer.
//!
//! # Responsibility
//! - Define the lookup contract dashboards use to resolve typed ids.
//! - Keep dataset layout out of controller code.
//!
//! # Invariants
//! - Lookups are read-only and never fail; misses are `None` or empty.

pub mod directory_repo;
