use std::sync::Arc;
use udaan_core::dataset::fixture::ORG_COMPETENCIES;
use udaan_core::view::employee_dashboard::EmployeeScreen;
use udaan_core::view::hr_dashboard::{HrDashboard, HrScreen};
use udaan_core::{competency_gaps, App, Dataset, EmployeeId, InMemoryDirectory, Screen, UserRole};

// Employee "3" targets General Manager (required 8, 8, 7, ...).
fn directory_with_extreme_scores() -> Arc<InMemoryDirectory> {
    let mut value = serde_json::to_value(Dataset::fixture()).unwrap();
    let competencies = &mut value["employees"][0]["competencies"];
    competencies["Strategic Thinking"] = i32::MIN.into();
    competencies["Leadership"] = 15.into();
    competencies["Financial Acumen"] = (-3).into();

    let dataset = Dataset::from_json_str(&value.to_string()).unwrap();
    Arc::new(InMemoryDirectory::new(dataset))
}

#[test]
fn extreme_scores_load_without_clamping() {
    let directory = directory_with_extreme_scores();
    let employee = &directory.dataset().employees[0];
    assert_eq!(employee.competency_score("Strategic Thinking"), i32::MIN);
    assert_eq!(employee.competency_score("Leadership"), 15);
    assert_eq!(employee.competency_score("Financial Acumen"), -3);
}

#[test]
fn hr_detail_saturates_shortfalls() {
    let mut dashboard = HrDashboard::new(directory_with_extreme_scores());
    dashboard.open_employee(&EmployeeId::from("3")).unwrap();
    let HrScreen::EmployeeDetail(detail) = dashboard.render() else {
        panic!("expected employee detail");
    };

    let shortfalls = detail
        .profile_comparison
        .iter()
        .map(|item| (item.competency.as_str(), item.shortfall))
        .take(3)
        .collect::<Vec<_>>();
    assert_eq!(
        shortfalls,
        vec![
            ("Strategic Thinking", i32::MAX),
            ("Leadership", 0),
            ("Financial Acumen", 10),
        ]
    );
    assert!(!detail.meets_profile);
    assert_eq!(detail.radar.unwrap().total_shortfall(), i32::MAX);
}

#[test]
fn employee_radar_plots_raw_scores() {
    let mut app = App::new(directory_with_extreme_scores());
    app.quick_login(UserRole::Employee);
    let Screen::EmployeeDashboard(EmployeeScreen::Plan(plan)) = app.screen() else {
        panic!("expected employee plan");
    };

    let radar = plan.radar.unwrap();
    assert_eq!(radar.axes[0].current, i32::MIN);
    assert_eq!(radar.axes[0].shortfall(), i32::MAX);
    assert_eq!(radar.axes[1].current, 15);
    assert_eq!(radar.axes[1].shortfall(), 0);
    assert_eq!(radar.axes[2].shortfall(), 10);
    assert!(serde_json::to_string(&app.screen()).is_ok());
}

#[test]
fn organization_gaps_average_extreme_scores() {
    let directory = directory_with_extreme_scores();
    let employees = directory.dataset().employees.iter().collect::<Vec<_>>();
    let gaps = competency_gaps(&employees, &ORG_COMPETENCIES);

    // (i32::MIN + 22) / 5 rounds half up to -429_496_725.
    assert_eq!(gaps[0].average, -429_496_725);
    assert_eq!(gaps[0].gap, 429_496_733);
    // 40 / 5
    assert_eq!(gaps[1].average, 8);
    assert_eq!(gaps[1].gap, 0);
    // 19 / 5 = 3.8
    assert_eq!(gaps[2].average, 4);
    assert_eq!(gaps[2].gap, 4);
}
