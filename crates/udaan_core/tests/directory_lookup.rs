use udaan_core::model::ids::{ActivityId, EmployeeId, UserId};
use udaan_core::{DirectoryRepository, InMemoryDirectory, UserRole};

#[test]
fn manager_two_owns_the_five_fixture_employees_in_order() {
    let directory = InMemoryDirectory::fixture();
    let team = directory.employees_by_manager(&UserId::from("2"));
    let ids = team
        .iter()
        .map(|employee| employee.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["3", "4", "5", "6", "7"]);
}

#[test]
fn unknown_manager_yields_empty_team() {
    let directory = InMemoryDirectory::fixture();
    assert!(directory.employees_by_manager(&UserId::from("999")).is_empty());
}

#[test]
fn lookups_return_none_for_unknown_ids() {
    let directory = InMemoryDirectory::fixture();
    assert!(directory.employee_by_id(&EmployeeId::from("42")).is_none());
    assert!(directory.user_by_id(&UserId::from("42")).is_none());
    assert!(directory.success_profile_by_role("Chief Astronaut").is_none());
    assert!(directory
        .activities_by_employee(&EmployeeId::from("4"))
        .is_empty());
}

#[test]
fn activities_and_profiles_resolve_for_employee_three() {
    let directory = InMemoryDirectory::fixture();
    let employee = directory.employee_by_id(&EmployeeId::from("3")).unwrap();

    let activity_ids = directory
        .activities_by_employee(&employee.id)
        .iter()
        .map(|activity| activity.id.clone())
        .collect::<Vec<_>>();
    assert_eq!(
        activity_ids,
        ["a1", "a2", "a3", "a4", "a5"]
            .into_iter()
            .map(ActivityId::from)
            .collect::<Vec<_>>()
    );

    let profile = directory
        .success_profile_by_role(employee.target_role.as_str())
        .unwrap();
    assert_eq!(profile.id.as_str(), "sp1");
    assert_eq!(profile.minimum_experience, 15);

    let manager = directory.manager_of(employee).unwrap();
    assert_eq!(manager.name, "Rajesh Kumar");
    assert_eq!(manager.role, UserRole::Manager);
}

#[test]
fn users_by_role_partitions_fixture_users() {
    let directory = InMemoryDirectory::fixture();
    let total = UserRole::ALL
        .into_iter()
        .map(|role| directory.users_by_role(role).len())
        .sum::<usize>();
    assert_eq!(total, directory.users().len());
    assert_eq!(directory.users_by_role(UserRole::Hr)[0].name, "HR Admin");
}
