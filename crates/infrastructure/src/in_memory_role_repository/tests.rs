use chrono::NaiveDate;
use mla_connect_application::RoleRepository;
use mla_connect_core::{AppError, RoleId};
use mla_connect_domain::{Role, RoleAssignment, RoleStatus};

use super::InMemoryRoleRepository;

fn role(name: &str) -> Role {
    Role::new(
        RoleId::new(),
        name,
        "",
        ["user_view"].into_iter().collect(),
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default(),
    )
    .unwrap_or_else(|_| unreachable!())
}

#[test]
fn list_roles_keeps_insertion_order() {
    let mut repository = InMemoryRoleRepository::new();
    for name in ["Zeta", "Alpha", "Mid"] {
        assert!(repository.insert_role(role(name)).is_ok());
    }

    let names: Vec<String> = repository
        .list_roles()
        .unwrap_or_default()
        .iter()
        .map(|role| role.name().as_str().to_owned())
        .collect();

    assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn insert_role_rejects_duplicate_identifier() {
    let first = role("Admin");
    let result = InMemoryRoleRepository::with_roles([first.clone(), first]);

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[test]
fn update_role_replaces_stored_copy() {
    let mut stored = role("Admin");
    let mut repository =
        InMemoryRoleRepository::with_roles([stored.clone()]).unwrap_or_default();

    stored.toggle_status();
    assert!(repository.update_role(stored.clone()).is_ok());

    let found = repository.find_role(stored.role_id());
    assert_eq!(
        found.ok().flatten().map(|role| role.status()),
        Some(RoleStatus::Inactive)
    );
}

#[test]
fn update_role_reports_missing_role() {
    let mut repository = InMemoryRoleRepository::new();

    let result = repository.update_role(role("Ghost"));

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[test]
fn assignments_are_unique_per_subject_and_role() {
    let admin = role("Admin");
    let mut repository =
        InMemoryRoleRepository::with_roles([admin.clone()]).unwrap_or_default();
    let assigned_on = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap_or_default();
    let assignment = RoleAssignment::new("asha", &admin, assigned_on);
    assert!(assignment.is_ok());
    let assignment = assignment.unwrap_or_else(|_| unreachable!());

    assert!(repository.insert_assignment(assignment.clone()).is_ok());
    assert!(matches!(
        repository.insert_assignment(assignment),
        Err(AppError::Conflict(_))
    ));

    let removed = repository.remove_assignment(admin.role_id(), "asha");
    assert!(removed.ok().flatten().is_some());
    let removed_again = repository.remove_assignment(admin.role_id(), "asha");
    assert!(removed_again.ok().flatten().is_none());
}
