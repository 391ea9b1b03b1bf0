use udaan_core::dataset::fixture::ORG_COMPETENCIES;
use udaan_core::kpi::summary::average_progress;
use udaan_core::matrix::nine_box::{employees_in_cell, CellMembers};
use udaan_core::model::employee::NineBoxPosition;
use udaan_core::{
    competency_gaps, CellKey, CellTier, Dataset, Employee, HrKpis, IdpStatus, ManagerKpis,
    NineBoxMatrix, StatusCounts,
};

fn fixture_employees() -> Vec<Employee> {
    Dataset::fixture().employees
}

fn with_position(mut employee: Employee, performance: i32, potential: i32) -> Employee {
    employee.nine_box_position = NineBoxPosition::new(performance, potential);
    employee
}

#[test]
fn in_range_employees_land_in_exactly_one_cell() {
    let base = fixture_employees().remove(0);
    let employees = (0..=4)
        .flat_map(|performance| (0..=4).map(move |potential| (performance, potential)))
        .map(|(performance, potential)| with_position(base.clone(), performance, potential))
        .collect::<Vec<_>>();

    for employee in &employees {
        let hits = CellKey::display_order()
            .filter(|key| key.contains(employee))
            .count();
        let in_range = (1..=3).contains(&employee.nine_box_position.performance)
            && (1..=3).contains(&employee.nine_box_position.potential);
        assert_eq!(hits, usize::from(in_range));
    }

    let matrix = NineBoxMatrix::build(&employees, None);
    assert_eq!(matrix.placed_count(), 9);
    assert_eq!(matrix.unplaced.len(), employees.len() - 9);
}

#[test]
fn tier_depends_only_on_axis_sum() {
    for key in CellKey::display_order() {
        let expected = match key.sum() {
            sum if sum >= 5 => CellTier::HighPriority,
            4 => CellTier::Medium,
            _ => CellTier::NeedsAttention,
        };
        assert_eq!(key.tier(), expected, "{key:?}");
    }
    let high = CellKey::display_order()
        .filter(|key| key.tier() == CellTier::HighPriority)
        .count();
    let medium = CellKey::display_order()
        .filter(|key| key.tier() == CellTier::Medium)
        .count();
    assert_eq!((high, medium, 9 - high - medium), (3, 3, 3));
}

#[test]
fn top_right_cell_holds_fixture_high_performers() {
    let employees = fixture_employees();
    let matrix = NineBoxMatrix::build(&employees, None);
    let key = CellKey::from_scores(3, 3).unwrap();
    let cell = matrix.cell(key).unwrap();

    assert_eq!(cell.label, "High Performer\nHigh Potential");
    assert_eq!(cell.tier, CellTier::HighPriority);
    assert_eq!(cell.count, 2);
    assert_eq!(
        cell.members,
        CellMembers::Names(vec!["Anya Sharma".to_string(), "Meera Patel".to_string()])
    );
    assert_eq!(matrix.hit(0, 2), Some(key));
}

#[test]
fn crowded_cell_shows_count_only() {
    let base = fixture_employees().remove(0);
    let employees = (0..4)
        .map(|_| with_position(base.clone(), 1, 1))
        .collect::<Vec<_>>();
    let matrix = NineBoxMatrix::build(&employees, None);
    let cell = matrix.cell(CellKey::from_scores(1, 1).unwrap()).unwrap();
    assert_eq!(cell.count, 4);
    assert_eq!(cell.members, CellMembers::CountOnly);
    assert_eq!(cell.label, "Under Performer");
}

#[test]
fn selection_highlights_one_cell_and_filters_members() {
    let employees = fixture_employees();
    let key = CellKey::from_scores(2, 2).unwrap();
    let matrix = NineBoxMatrix::build(&employees, Some(key));
    let selected = matrix
        .cells
        .iter()
        .filter(|cell| cell.selected)
        .map(|cell| cell.key)
        .collect::<Vec<_>>();
    assert_eq!(selected, vec![key]);

    let members = employees_in_cell(&employees, key);
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].name, "Amit Verma");
}

#[test]
fn fixture_average_readiness_is_43() {
    let employees = fixture_employees();
    let refs = employees.iter().collect::<Vec<_>>();
    let kpis = HrKpis::compute(&refs);
    assert_eq!(kpis.avg_readiness, 43);
    assert_eq!(kpis.total_pipeline, 5);
    assert_eq!(kpis.awaiting_review, 2);
    assert_eq!(kpis.approved_idps, 1);
}

#[test]
fn empty_scope_averages_to_zero() {
    assert_eq!(average_progress(std::iter::empty()), 0);
    let kpis = HrKpis::compute(&[]);
    assert_eq!(kpis.avg_readiness, 0);
    assert!(competency_gaps(&[], &ORG_COMPETENCIES)
        .iter()
        .all(|gap| gap.average == 0));
}

#[test]
fn status_counts_partition_the_scope() {
    let employees = fixture_employees();
    let counts = StatusCounts::tally(&employees);
    let by_status = IdpStatus::ALL
        .into_iter()
        .map(|status| counts.get(status))
        .sum::<usize>();
    assert_eq!(by_status, employees.len());
    assert_eq!(counts.total(), employees.len());

    let refs = employees.iter().collect::<Vec<_>>();
    let team = ManagerKpis::compute(&refs);
    assert_eq!(team.team_size, 5);
    assert_eq!(team.pending_inputs, 0);
    assert_eq!(team.pending_reviews, 2);
    assert_eq!(team.approved_idps, 2);
}

#[test]
fn averages_ignore_input_order() {
    let employees = fixture_employees();
    let forward = employees.iter().collect::<Vec<_>>();
    let mut reversed = forward.clone();
    reversed.reverse();
    let mut rotated = forward.clone();
    rotated.rotate_left(2);

    let expected = HrKpis::compute(&forward);
    let gaps = competency_gaps(&forward, &ORG_COMPETENCIES);
    for order in [&reversed, &rotated] {
        assert_eq!(HrKpis::compute(order), expected);
        assert_eq!(competency_gaps(order, &ORG_COMPETENCIES), gaps);
    }
}

#[test]
fn fixture_competency_gaps_round_half_up() {
    let employees = fixture_employees();
    let refs = employees.iter().collect::<Vec<_>>();
    let gaps = competency_gaps(&refs, &ORG_COMPETENCIES);
    let strategic = &gaps[0];
    assert_eq!(strategic.competency, "Strategic Thinking");
    // 29 / 5 = 5.8
    assert_eq!(strategic.average, 6);
    assert_eq!(strategic.gap, 2);
    assert!(strategic.has_gap());
}
