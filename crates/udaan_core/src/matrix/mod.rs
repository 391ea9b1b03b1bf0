//! Talent matrix projections.
//!
//! # Responsibility
//! - Bucket employee records into the 3x3 performance/potential grid.
//! - Keep classification (tier, label) a pure function of the cell key.

pub mod nine_box;
