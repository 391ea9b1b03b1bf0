//! Radar (spider) chart comparing current competencies against a target.

use crate::model::employee::CompetencyScores;
use serde::{Deserialize, Serialize};

pub const CURRENT_COLOR: &str = "#3b82f6";
pub const TARGET_COLOR: &str = "#10b981";
pub const RADAR_DOMAIN: (i32, i32) = (0, 10);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarAxis {
    pub competency: String,
    pub current: i32,
    pub target: i32,
}

impl RadarAxis {
    pub fn shortfall(&self) -> i32 {
        self.target.saturating_sub(self.current).max(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarSeries {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarChart {
    pub title: Option<String>,
    pub domain: (i32, i32),
    /// One axis per target competency, in target order.
    pub axes: Vec<RadarAxis>,
    pub series: Vec<RadarSeries>,
}

impl RadarChart {
    /// Axes follow `target`; competencies missing from `current` plot as `0`
    /// and extra `current` entries are ignored.
    pub fn new(
        current: &CompetencyScores,
        target: &CompetencyScores,
        title: Option<String>,
    ) -> Self {
        let axes = target
            .iter()
            .map(|(competency, target)| RadarAxis {
                competency: competency.clone(),
                current: current.get(competency).copied().unwrap_or(0),
                target: *target,
            })
            .collect();
        Self {
            title,
            domain: RADAR_DOMAIN,
            axes,
            series: vec![
                RadarSeries {
                    name: "Current".to_string(),
                    color: CURRENT_COLOR.to_string(),
                },
                RadarSeries {
                    name: "Target".to_string(),
                    color: TARGET_COLOR.to_string(),
                },
            ],
        }
    }

    /// Sum of per-axis shortfalls, saturating at `i32::MAX`.
    pub fn total_shortfall(&self) -> i32 {
        self.axes
            .iter()
            .map(RadarAxis::shortfall)
            .fold(0, i32::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::RadarChart;
    use crate::model::employee::CompetencyScores;

    fn scores(items: &[(&str, i32)]) -> CompetencyScores {
        items
            .iter()
            .map(|(name, score)| ((*name).to_string(), *score))
            .collect()
    }

    #[test]
    fn axes_follow_target_order_and_default_missing_to_zero() {
        let current = scores(&[("Leadership", 6), ("Extra", 9)]);
        let target = scores(&[("Strategic Thinking", 8), ("Leadership", 8)]);
        let chart = RadarChart::new(&current, &target, Some("Gap".to_string()));

        assert_eq!(chart.axes.len(), 2);
        assert_eq!(chart.axes[0].competency, "Strategic Thinking");
        assert_eq!(chart.axes[0].current, 0);
        assert_eq!(chart.axes[1].current, 6);
        assert_eq!(chart.total_shortfall(), 10);
        assert_eq!(chart.series[0].name, "Current");
        assert_eq!(chart.series[1].name, "Target");
    }

    #[test]
    fn unclamped_scores_saturate_instead_of_overflowing() {
        let current = scores(&[("Leadership", i32::MIN), ("Innovation", 15)]);
        let target = scores(&[("Leadership", 8), ("Innovation", 8), ("Execution", 8)]);
        let chart = RadarChart::new(&current, &target, None);

        assert_eq!(chart.axes[0].shortfall(), i32::MAX);
        assert_eq!(chart.axes[1].shortfall(), 0);
        assert_eq!(chart.axes[2].shortfall(), 8);
        assert_eq!(chart.total_shortfall(), i32::MAX);
    }
}
