//! Dashboard KPI reductions.
//!
//! # Responsibility
//! - Count employees by IDP status for the HR and manager KPI cards.
//! - Compute rounded averages for readiness and competency scores.
//! - Derive per-competency gaps against the organization target.
//!
//! # Invariants
//! - Every reduction is order-independent over its input.
//! - Averages round half up and are `0` for an empty scope.
//! - Gaps are floored at `0`.

use crate::model::employee::{Employee, IdpStatus};
use serde::{Deserialize, Serialize};

/// Target competency score used by the gap analysis.
pub const TARGET_COMPETENCY_SCORE: i64 = 8;

/// Mean of `sum / count` rounded half up; `0` when `count == 0`.
pub fn rounded_mean(sum: i64, count: usize) -> i64 {
    if count == 0 {
        return 0;
    }
    let count = count as i64;
    (2 * sum + count).div_euclid(2 * count)
}

/// Rounded mean of `overall_progress` across the scope.
pub fn average_progress<'a>(employees: impl IntoIterator<Item = &'a Employee>) -> u32 {
    let (sum, count) = employees
        .into_iter()
        .fold((0_i64, 0_usize), |(sum, count), employee| {
            (sum + i64::from(employee.overall_progress), count + 1)
        });
    // overall_progress is validated to 0..=100, so the mean fits.
    rounded_mean(sum, count).clamp(0, i64::from(u32::MAX)) as u32
}

/// Employee counts per IDP status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub draft: usize,
    pub manager_approved: usize,
    pub committee_approved: usize,
    pub pending_revision: usize,
}

impl StatusCounts {
    pub fn tally<'a>(employees: impl IntoIterator<Item = &'a Employee>) -> Self {
        employees
            .into_iter()
            .fold(Self::default(), |mut counts, employee| {
                *counts.slot_mut(employee.idp_status) += 1;
                counts
            })
    }

    pub fn get(&self, status: IdpStatus) -> usize {
        match status {
            IdpStatus::Draft => self.draft,
            IdpStatus::ManagerApproved => self.manager_approved,
            IdpStatus::CommitteeApproved => self.committee_approved,
            IdpStatus::PendingRevision => self.pending_revision,
        }
    }

    pub fn total(&self) -> usize {
        IdpStatus::ALL.into_iter().map(|status| self.get(status)).sum()
    }

    fn slot_mut(&mut self, status: IdpStatus) -> &mut usize {
        match status {
            IdpStatus::Draft => &mut self.draft,
            IdpStatus::ManagerApproved => &mut self.manager_approved,
            IdpStatus::CommitteeApproved => &mut self.committee_approved,
            IdpStatus::PendingRevision => &mut self.pending_revision,
        }
    }
}

/// Organization-wide KPI cards for the HR committee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrKpis {
    pub total_pipeline: usize,
    /// Plans approved by a manager and waiting for the committee.
    pub awaiting_review: usize,
    pub approved_idps: usize,
    /// Rounded mean of overall progress, in percent.
    pub avg_readiness: u32,
}

impl HrKpis {
    pub fn compute(employees: &[&Employee]) -> Self {
        let counts = StatusCounts::tally(employees.iter().copied());
        Self {
            total_pipeline: employees.len(),
            awaiting_review: counts.manager_approved,
            approved_idps: counts.committee_approved,
            avg_readiness: average_progress(employees.iter().copied()),
        }
    }
}

/// Team KPI cards for one manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerKpis {
    pub team_size: usize,
    /// Team members without recorded appraisal input.
    pub pending_inputs: usize,
    /// Draft plans waiting for the manager's review.
    pub pending_reviews: usize,
    /// Plans the manager has approved.
    pub approved_idps: usize,
}

impl ManagerKpis {
    pub fn compute(team: &[&Employee]) -> Self {
        let counts = StatusCounts::tally(team.iter().copied());
        Self {
            team_size: team.len(),
            pending_inputs: team
                .iter()
                .filter(|employee| !employee.has_appraisal_input())
                .count(),
            pending_reviews: counts.draft,
            approved_idps: counts.manager_approved,
        }
    }
}

/// Organization average and gap for one competency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetencyGap {
    pub competency: String,
    /// Rounded mean score; missing scores count as `0`.
    pub average: i64,
    pub target: i64,
    /// `target - average`, floored at `0`.
    pub gap: i64,
}

impl CompetencyGap {
    pub fn has_gap(&self) -> bool {
        self.gap > 0
    }
}

/// Per-competency average and gap against [`TARGET_COMPETENCY_SCORE`].
pub fn competency_gaps(employees: &[&Employee], competencies: &[&str]) -> Vec<CompetencyGap> {
    competencies
        .iter()
        .map(|competency| {
            let sum = employees
                .iter()
                .map(|employee| i64::from(employee.competency_score(competency)))
                .sum::<i64>();
            let average = rounded_mean(sum, employees.len());
            CompetencyGap {
                competency: (*competency).to_string(),
                average,
                target: TARGET_COMPETENCY_SCORE,
                gap: (TARGET_COMPETENCY_SCORE - average).max(0),
            }
        })
        .collect()
}
