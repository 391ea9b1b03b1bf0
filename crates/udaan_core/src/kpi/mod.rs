//! KPI aggregation over an employee scope (whole org or one team).

pub mod summary;
