//! Success profile model: the bar an employee is measured against for a
//! target role.

use crate::model::employee::{CompetencyScores, Employee};
use crate::model::ids::SuccessProfileId;
use serde::{Deserialize, Serialize};

/// Required competencies, skills and experience for one role title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessProfile {
    pub id: SuccessProfileId,
    pub role_title: String,
    pub required_competencies: CompetencyScores,
    pub functional_skills: Vec<String>,
    pub geographical_experience: Vec<String>,
    /// Minimum years of experience.
    pub minimum_experience: u32,
}

/// Per-competency comparison of an employee against a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetencyComparison {
    pub competency: String,
    pub current: i32,
    pub required: i32,
    /// `required - current`, floored at zero and saturating at `i32::MAX`.
    pub shortfall: i32,
}

impl SuccessProfile {
    /// Compares an employee against each required competency, in profile
    /// order. Competencies the employee lacks count as `0`.
    pub fn compare(&self, employee: &Employee) -> Vec<CompetencyComparison> {
        self.required_competencies
            .iter()
            .map(|(competency, required)| {
                let current = employee.competency_score(competency);
                CompetencyComparison {
                    competency: competency.clone(),
                    current,
                    required: *required,
                    shortfall: required.saturating_sub(current).max(0),
                }
            })
            .collect()
    }

    /// Returns whether every required competency is met.
    pub fn is_met_by(&self, employee: &Employee) -> bool {
        self.compare(employee)
            .iter()
            .all(|item| item.shortfall == 0)
    }
}
