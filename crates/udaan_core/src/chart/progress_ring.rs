//! Ring (donut) progress chart view-model.

use serde::{Deserialize, Serialize};

pub const COMPLETED_COLOR: &str = "#10b981";
pub const REMAINING_COLOR: &str = "#1f2937";
pub const DEFAULT_RING_SIZE: u32 = 200;
const INNER_RADIUS_RATIO: f32 = 0.35;
const OUTER_RADIUS_RATIO: f32 = 0.45;
const PADDING_ANGLE_DEG: f32 = 2.0;

/// One arc of the ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingSegment {
    pub name: String,
    pub value: u32,
    pub color: String,
}

/// Center caption shown inside the ring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingLabel {
    pub value: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRing {
    pub progress: u32,
    pub size: u32,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub padding_angle: f32,
    /// Completed arc first, remaining arc second.
    pub segments: Vec<RingSegment>,
    pub label: Option<RingLabel>,
}

impl ProgressRing {
    /// Full-size ring with the percentage label.
    pub fn new(progress: u32) -> Self {
        Self::with_options(progress, DEFAULT_RING_SIZE, true)
    }

    /// Progress above 100 is clamped so the two arcs always sum to 100.
    pub fn with_options(progress: u32, size: u32, show_label: bool) -> Self {
        let completed = progress.min(100);
        let size_f = size as f32;
        Self {
            progress: completed,
            size,
            inner_radius: size_f * INNER_RADIUS_RATIO,
            outer_radius: size_f * OUTER_RADIUS_RATIO,
            padding_angle: PADDING_ANGLE_DEG,
            segments: vec![
                RingSegment {
                    name: "Completed".to_string(),
                    value: completed,
                    color: COMPLETED_COLOR.to_string(),
                },
                RingSegment {
                    name: "Remaining".to_string(),
                    value: 100 - completed,
                    color: REMAINING_COLOR.to_string(),
                },
            ],
            label: show_label.then(|| RingLabel {
                value: format!("{completed}%"),
                caption: "Complete".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProgressRing;

    #[test]
    fn default_ring_has_label_and_complementary_arcs() {
        let ring = ProgressRing::new(65);
        assert_eq!(ring.size, 200);
        assert_eq!(ring.segments[0].value, 65);
        assert_eq!(ring.segments[1].value, 35);
        assert_eq!(ring.label.as_ref().map(|l| l.value.as_str()), Some("65%"));
        assert!((ring.inner_radius - 70.0).abs() < 0.001);
        assert!((ring.outer_radius - 90.0).abs() < 0.001);
    }

    #[test]
    fn compact_ring_omits_label_and_clamps() {
        let ring = ProgressRing::with_options(140, 60, false);
        assert!(ring.label.is_none());
        assert_eq!(ring.segments[0].value, 100);
        assert_eq!(ring.segments[1].value, 0);
    }
}
