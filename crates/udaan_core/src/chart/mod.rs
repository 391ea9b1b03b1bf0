//! Chart view-models: plain data a UI shell draws without further logic.

pub mod progress_ring;
pub mod radar;
