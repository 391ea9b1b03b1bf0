//! 9-box talent matrix bucketing and classification.
//!
//! # Responsibility
//! - Partition employees into the nine (performance, potential) cells.
//! - Classify each cell into a priority tier and a fixed label.
//! - Lay cells out for display: potential rows 3,2,1 top to bottom,
//!   performance columns 1,2,3 left to right.
//!
//! # Invariants
//! - An employee with both axes in `1..=3` lands in exactly one cell; any
//!   other employee lands in none and is listed in `unplaced`.
//! - Tier depends only on `performance + potential`.
//! - The matrix holds no selection state; the caller passes the selected key
//!   in and receives cell keys back from `hit`.

use crate::model::employee::{Employee, NineBoxPosition};
use crate::model::ids::EmployeeId;
use log::warn;
use serde::{Deserialize, Serialize};

/// Cells with at most this many members list names inline.
pub const MAX_INLINE_NAMES: usize = 3;

/// One axis score on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum GridLevel {
    Low,
    Medium,
    High,
}

impl GridLevel {
    pub const ASCENDING: [GridLevel; 3] = [GridLevel::Low, GridLevel::Medium, GridLevel::High];
    pub const DESCENDING: [GridLevel; 3] = [GridLevel::High, GridLevel::Medium, GridLevel::Low];

    pub fn from_score(score: i32) -> Option<Self> {
        match score {
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            _ => None,
        }
    }

    pub fn score(self) -> i32 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

impl From<GridLevel> for i32 {
    fn from(value: GridLevel) -> Self {
        value.score()
    }
}

impl TryFrom<i32> for GridLevel {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_score(value).ok_or_else(|| format!("grid level must be 1..=3, got {value}"))
    }
}

/// Priority tier of a cell, from the sum of its two axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellTier {
    /// Sum >= 5.
    HighPriority,
    /// Sum == 4.
    Medium,
    /// Sum <= 3.
    NeedsAttention,
}

impl CellTier {
    pub const ALL: [CellTier; 3] = [
        CellTier::HighPriority,
        CellTier::Medium,
        CellTier::NeedsAttention,
    ];

    pub fn from_sum(sum: i32) -> Self {
        if sum >= 5 {
            Self::HighPriority
        } else if sum >= 4 {
            Self::Medium
        } else {
            Self::NeedsAttention
        }
    }

    /// Legend caption.
    pub fn legend_label(self) -> &'static str {
        match self {
            Self::HighPriority => "High Priority",
            Self::Medium => "Medium Priority",
            Self::NeedsAttention => "Needs Attention",
        }
    }

    /// Color family used for cell fill and border.
    pub fn tone(self) -> &'static str {
        match self {
            Self::HighPriority => "green",
            Self::Medium => "yellow",
            Self::NeedsAttention => "red",
        }
    }
}

/// Address of one matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellKey {
    pub performance: GridLevel,
    pub potential: GridLevel,
}

impl CellKey {
    pub fn new(performance: GridLevel, potential: GridLevel) -> Self {
        Self {
            performance,
            potential,
        }
    }

    /// Builds a key from raw axis scores; `None` when either is outside `1..=3`.
    pub fn from_scores(performance: i32, potential: i32) -> Option<Self> {
        Some(Self::new(
            GridLevel::from_score(performance)?,
            GridLevel::from_score(potential)?,
        ))
    }

    pub fn from_position(position: &NineBoxPosition) -> Option<Self> {
        Self::from_scores(position.performance, position.potential)
    }

    /// All nine keys in display order (row-major, top row first).
    pub fn display_order() -> impl Iterator<Item = CellKey> {
        GridLevel::DESCENDING.into_iter().flat_map(|potential| {
            GridLevel::ASCENDING
                .into_iter()
                .map(move |performance| CellKey::new(performance, potential))
        })
    }

    pub fn sum(self) -> i32 {
        self.performance.score() + self.potential.score()
    }

    pub fn tier(self) -> CellTier {
        CellTier::from_sum(self.sum())
    }

    /// Fixed descriptor; two-line labels are separated by `\n`.
    pub fn label(self) -> &'static str {
        use GridLevel::{High, Low, Medium};
        match (self.performance, self.potential) {
            (High, High) => "High Performer\nHigh Potential",
            (High, Medium) => "High Performer\nMedium Potential",
            (High, Low) => "High Performer\nLow Potential",
            (Medium, High) => "Medium Performer\nHigh Potential",
            (Medium, Medium) => "Core Performer",
            (Medium, Low) => "Medium Performer\nLow Potential",
            (Low, High) => "Low Performer\nHigh Potential",
            (Low, Medium) => "Low Performer\nMedium Potential",
            (Low, Low) => "Under Performer",
        }
    }

    /// Returns whether an employee's recorded position is this cell.
    pub fn contains(self, employee: &Employee) -> bool {
        CellKey::from_position(&employee.nine_box_position) == Some(self)
    }
}

/// What a cell shows beyond its label and count badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "names", rename_all = "snake_case")]
pub enum CellMembers {
    Empty,
    /// One to [`MAX_INLINE_NAMES`] member names, in input order.
    Names(Vec<String>),
    /// Too many members to list; only the count badge is shown.
    CountOnly,
}

/// Rendered state of one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixCell {
    pub key: CellKey,
    pub label: String,
    pub tier: CellTier,
    pub count: usize,
    pub members: CellMembers,
    pub employee_ids: Vec<EmployeeId>,
    pub selected: bool,
}

/// Legend row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub tier: CellTier,
    pub label: String,
    pub tone: String,
}

/// Fully bucketed matrix ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NineBoxMatrix {
    pub title: String,
    /// Nine cells in display order.
    pub cells: Vec<MatrixCell>,
    /// Employees whose recorded position is outside the grid.
    pub unplaced: Vec<EmployeeId>,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub legend: Vec<LegendEntry>,
}

impl NineBoxMatrix {
    /// Buckets `employees` into the grid; `selected` only drives highlighting.
    pub fn build<'a>(
        employees: impl IntoIterator<Item = &'a Employee>,
        selected: Option<CellKey>,
    ) -> Self {
        let mut buckets: Vec<(CellKey, Vec<&Employee>)> = CellKey::display_order()
            .map(|key| (key, Vec::new()))
            .collect();
        let mut unplaced = Vec::new();

        for employee in employees {
            match CellKey::from_position(&employee.nine_box_position) {
                Some(key) => {
                    if let Some((_, members)) = buckets.iter_mut().find(|(k, _)| *k == key) {
                        members.push(employee);
                    }
                }
                None => {
                    warn!(
                        "event=matrix_position_out_of_range module=matrix status=warn employee_id={} performance={} potential={}",
                        employee.id,
                        employee.nine_box_position.performance,
                        employee.nine_box_position.potential
                    );
                    unplaced.push(employee.id.clone());
                }
            }
        }

        let cells = buckets
            .into_iter()
            .map(|(key, members)| MatrixCell {
                key,
                label: key.label().to_string(),
                tier: key.tier(),
                count: members.len(),
                members: cell_members(&members),
                employee_ids: members.iter().map(|employee| employee.id.clone()).collect(),
                selected: selected == Some(key),
            })
            .collect();

        Self {
            title: "9-Box Matrix".to_string(),
            cells,
            unplaced,
            x_axis_label: "← Performance →".to_string(),
            y_axis_label: "Potential →".to_string(),
            legend: CellTier::ALL
                .into_iter()
                .map(|tier| LegendEntry {
                    tier,
                    label: tier.legend_label().to_string(),
                    tone: tier.tone().to_string(),
                })
                .collect(),
        }
    }

    pub fn cell(&self, key: CellKey) -> Option<&MatrixCell> {
        self.cells.iter().find(|cell| cell.key == key)
    }

    /// Maps a tap at display `(row, column)` to its cell key.
    pub fn hit(&self, row: usize, column: usize) -> Option<CellKey> {
        if row >= 3 || column >= 3 {
            return None;
        }
        self.cells.get(row * 3 + column).map(|cell| cell.key)
    }

    /// Total number of employees placed on the grid.
    pub fn placed_count(&self) -> usize {
        self.cells.iter().map(|cell| cell.count).sum()
    }
}

/// Employees whose recorded position equals `key`, in input order.
pub fn employees_in_cell<'a>(
    employees: impl IntoIterator<Item = &'a Employee>,
    key: CellKey,
) -> Vec<&'a Employee> {
    employees
        .into_iter()
        .filter(|employee| key.contains(employee))
        .collect()
}

fn cell_members(members: &[&Employee]) -> CellMembers {
    match members.len() {
        0 => CellMembers::Empty,
        n if n <= MAX_INLINE_NAMES => {
            CellMembers::Names(members.iter().map(|employee| employee.name.clone()).collect())
        }
        _ => CellMembers::CountOnly,
    }
}

#[cfg(test)]
mod tests {
    use super::{CellKey, CellTier, GridLevel};

    #[test]
    fn tier_thresholds_follow_axis_sum() {
        assert_eq!(CellTier::from_sum(6), CellTier::HighPriority);
        assert_eq!(CellTier::from_sum(5), CellTier::HighPriority);
        assert_eq!(CellTier::from_sum(4), CellTier::Medium);
        assert_eq!(CellTier::from_sum(3), CellTier::NeedsAttention);
        assert_eq!(CellTier::from_sum(2), CellTier::NeedsAttention);
    }

    #[test]
    fn display_order_starts_top_left() {
        let keys = CellKey::display_order().collect::<Vec<_>>();
        assert_eq!(keys.len(), 9);
        assert_eq!(keys[0], CellKey::new(GridLevel::Low, GridLevel::High));
        assert_eq!(keys[2], CellKey::new(GridLevel::High, GridLevel::High));
        assert_eq!(keys[8], CellKey::new(GridLevel::High, GridLevel::Low));
    }

    #[test]
    fn out_of_range_scores_have_no_key() {
        assert_eq!(CellKey::from_scores(0, 2), None);
        assert_eq!(CellKey::from_scores(2, 4), None);
        assert!(CellKey::from_scores(1, 1).is_some());
    }

    #[test]
    fn key_serializes_as_raw_scores() {
        let key = CellKey::new(GridLevel::High, GridLevel::Medium);
        let json = serde_json::to_value(key).expect("serialize key");
        assert_eq!(json, serde_json::json!({"performance": 3, "potential": 2}));
        let decoded: CellKey = serde_json::from_value(json).expect("decode key");
        assert_eq!(decoded, key);
        assert!(serde_json::from_value::<CellKey>(
            serde_json::json!({"performance": 4, "potential": 2})
        )
        .is_err());
    }
}
