use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use mla_connect_core::{AppError, AppResult, RoleId};
use mla_connect_domain::{
    PermissionCatalog, PermissionModule, PermissionSet, Role, RoleAssignment, RoleStatus,
    toggle_module,
};

use crate::role_ports::{
    CreateRoleInput, NotificationOutcome, RoleAction, RoleListQuery, RoleNotification,
    RoleNotifier, RoleRepository, UpdateRoleInput,
};

use super::{RoleService, RoleServiceConfig};

#[derive(Default)]
struct FakeRoleRepository {
    roles: Vec<Role>,
    assignments: Vec<RoleAssignment>,
    writes: Arc<AtomicUsize>,
    reject_role_updates: Arc<AtomicBool>,
}

impl RoleRepository for FakeRoleRepository {
    fn list_roles(&self) -> AppResult<Vec<Role>> {
        Ok(self.roles.clone())
    }

    fn find_role(&self, role_id: RoleId) -> AppResult<Option<Role>> {
        Ok(self
            .roles
            .iter()
            .find(|role| role.role_id() == role_id)
            .cloned())
    }

    fn insert_role(&mut self, role: Role) -> AppResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.roles.push(role);
        Ok(())
    }

    fn update_role(&mut self, role: Role) -> AppResult<()> {
        if self.reject_role_updates.load(Ordering::SeqCst) {
            return Err(AppError::Internal("role store unavailable".to_owned()));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        let stored = self
            .roles
            .iter_mut()
            .find(|stored| stored.role_id() == role.role_id())
            .ok_or_else(|| AppError::NotFound("role".to_owned()))?;
        *stored = role;
        Ok(())
    }

    fn list_assignments(&self) -> AppResult<Vec<RoleAssignment>> {
        Ok(self.assignments.clone())
    }

    fn insert_assignment(&mut self, assignment: RoleAssignment) -> AppResult<()> {
        if self.assignments.iter().any(|stored| {
            stored.role_id() == assignment.role_id() && stored.subject() == assignment.subject()
        }) {
            return Err(AppError::Conflict("assignment".to_owned()));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.assignments.push(assignment);
        Ok(())
    }

    fn remove_assignment(
        &mut self,
        role_id: RoleId,
        subject: &str,
    ) -> AppResult<Option<RoleAssignment>> {
        let position = self
            .assignments
            .iter()
            .position(|stored| stored.role_id() == role_id && stored.subject() == subject);
        Ok(position.map(|index| self.assignments.remove(index)))
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notifications: Mutex<Vec<RoleNotification>>,
}

impl RecordingNotifier {
    fn recorded(&self) -> Vec<RoleNotification> {
        self.notifications
            .lock()
            .map(|notifications| notifications.clone())
            .unwrap_or_default()
    }
}

impl RoleNotifier for RecordingNotifier {
    fn notify(&self, notification: RoleNotification) {
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(notification);
        }
    }
}

struct Harness {
    service: RoleService,
    notifier: Arc<RecordingNotifier>,
    writes: Arc<AtomicUsize>,
    reject_role_updates: Arc<AtomicBool>,
}

fn harness(config: RoleServiceConfig) -> Harness {
    let writes = Arc::new(AtomicUsize::new(0));
    let reject_role_updates = Arc::new(AtomicBool::new(false));
    let notifier = Arc::new(RecordingNotifier::default());
    let repository = FakeRoleRepository {
        writes: writes.clone(),
        reject_role_updates: reject_role_updates.clone(),
        ..FakeRoleRepository::default()
    };
    let service = RoleService::new(
        Arc::new(PermissionCatalog::standard()),
        Box::new(repository),
        notifier.clone(),
        config,
    );

    Harness {
        service,
        notifier,
        writes,
        reject_role_updates,
    }
}

fn create_input(name: &str, permissions: &[&str]) -> CreateRoleInput {
    CreateRoleInput {
        name: name.to_owned(),
        description: format!("{name} description"),
        permissions: permissions.iter().copied().collect(),
    }
}

fn created(service: &mut RoleService, name: &str, permissions: &[&str]) -> Role {
    service
        .create_role(create_input(name, permissions))
        .unwrap_or_else(|_| unreachable!())
}

#[test]
fn create_role_starts_active_without_users() {
    let mut harness = harness(RoleServiceConfig::default());

    let role = harness.service.create_role(CreateRoleInput {
        name: "Content Editor".to_owned(),
        description: "Edits content".to_owned(),
        permissions: ["content_view", "content_create"].into_iter().collect(),
    });

    assert!(role.is_ok());
    let role = role.unwrap_or_else(|_| unreachable!());
    assert_eq!(role.status(), RoleStatus::Active);
    assert_eq!(role.user_count(), 0);
    let expected: PermissionSet = ["content_view", "content_create"].into_iter().collect();
    assert_eq!(role.permissions(), &expected);
    assert_eq!(harness.service.list_roles().unwrap_or_default(), vec![role]);
}

#[test]
fn create_role_rejects_empty_name_before_store() {
    let mut harness = harness(RoleServiceConfig::default());

    let result = harness
        .service
        .create_role(create_input("", &["content_view"]));

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(harness.writes.load(Ordering::SeqCst), 0);
}

#[test]
fn create_role_rejects_empty_permissions_before_store() {
    let mut harness = harness(RoleServiceConfig::default());

    let result = harness.service.create_role(create_input("Name", &[]));

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(harness.writes.load(Ordering::SeqCst), 0);
}

#[test]
fn create_role_rejects_unknown_permission() {
    let mut harness = harness(RoleServiceConfig::default());

    let result = harness
        .service
        .create_role(create_input("Auditor", &["report_view", "launch_rockets"]));

    assert!(matches!(result, Err(AppError::InvalidPermissionReference(_))));
    assert!(harness.service.list_roles().unwrap_or_default().is_empty());
}

#[test]
fn duplicate_names_are_allowed_by_default() {
    let mut harness = harness(RoleServiceConfig::default());

    created(&mut harness.service, "Field Officer", &["grievance_view"]);
    let second = harness
        .service
        .create_role(create_input("Field Officer", &["grievance_view"]));

    assert!(second.is_ok());
    assert_eq!(harness.service.list_roles().unwrap_or_default().len(), 2);
}

#[test]
fn duplicate_names_conflict_when_disallowed() {
    let mut harness = harness(RoleServiceConfig {
        allow_duplicate_names: false,
    });

    let first = created(&mut harness.service, "Field Officer", &["grievance_view"]);
    let second = harness
        .service
        .create_role(create_input(" field officer ", &["grievance_view"]));
    assert!(matches!(second, Err(AppError::Conflict(_))));

    let renamed_to_itself = harness.service.update_role(
        first.role_id(),
        UpdateRoleInput {
            name: "Field Officer".to_owned(),
            description: "Handles field visits".to_owned(),
            permissions: ["grievance_view", "grievance_resolve"].into_iter().collect(),
        },
    );
    assert!(renamed_to_itself.is_ok());
}

#[test]
fn renaming_onto_another_role_conflicts_when_disallowed() {
    let mut harness = harness(RoleServiceConfig {
        allow_duplicate_names: false,
    });
    created(&mut harness.service, "A", &["user_view"]);
    let b = created(&mut harness.service, "B", &["content_view"]);

    let result = harness.service.update_role(
        b.role_id(),
        UpdateRoleInput {
            name: " a ".to_owned(),
            description: "renamed".to_owned(),
            permissions: ["user_view"].into_iter().collect(),
        },
    );

    assert!(matches!(result, Err(AppError::Conflict(_))));
    let stored = harness.service.find_role(b.role_id());
    assert_eq!(stored.ok(), Some(b));
}

#[test]
fn update_role_replaces_details() {
    let mut harness = harness(RoleServiceConfig::default());
    let role = created(&mut harness.service, "Moderator", &["content_view"]);
    let permissions = toggle_module(
        role.permissions(),
        PermissionModule::ContentManagement,
        harness.service.catalog(),
    );

    let updated = harness.service.update_role(
        role.role_id(),
        UpdateRoleInput {
            name: "Senior Moderator".to_owned(),
            description: "Moderates and publishes".to_owned(),
            permissions,
        },
    );

    assert!(updated.is_ok());
    let stored = harness.service.find_role(role.role_id());
    assert!(stored.is_ok());
    let stored = stored.unwrap_or_else(|_| unreachable!());
    assert_eq!(stored.name().as_str(), "Senior Moderator");
    assert_eq!(stored.permissions().len(), 5);
    assert_eq!(stored.created_on(), role.created_on());
}

#[test]
fn update_role_reports_missing_role() {
    let mut harness = harness(RoleServiceConfig::default());

    let result = harness.service.update_role(
        RoleId::new(),
        UpdateRoleInput {
            name: "Ghost".to_owned(),
            description: String::new(),
            permissions: ["user_view"].into_iter().collect(),
        },
    );

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[test]
fn update_role_rejects_empty_permissions() {
    let mut harness = harness(RoleServiceConfig::default());
    let role = created(&mut harness.service, "Moderator", &["content_view"]);

    let result = harness.service.update_role(
        role.role_id(),
        UpdateRoleInput {
            name: "Moderator".to_owned(),
            description: String::new(),
            permissions: PermissionSet::new(),
        },
    );

    assert!(matches!(result, Err(AppError::Validation(_))));
    let stored = harness.service.find_role(role.role_id());
    assert_eq!(stored.ok().map(|role| role.permissions().len()), Some(1));
}

#[test]
fn toggle_role_status_flips_and_reports_missing_role() {
    let mut harness = harness(RoleServiceConfig::default());
    let role = created(&mut harness.service, "Volunteer", &["poll_view"]);

    let toggled = harness.service.toggle_role_status(role.role_id());
    assert_eq!(toggled.ok().map(|role| role.status()), Some(RoleStatus::Inactive));

    let toggled_back = harness.service.toggle_role_status(role.role_id());
    assert_eq!(toggled_back.ok().map(|role| role.status()), Some(RoleStatus::Active));

    let missing = harness.service.toggle_role_status(RoleId::new());
    assert!(matches!(missing, Err(AppError::NotFound(_))));
}

#[test]
fn stored_roles_only_reference_catalog_permissions() {
    let mut harness = harness(RoleServiceConfig::default());
    created(&mut harness.service, "Admin", &["user_view", "role_manage"]);
    let _ = harness
        .service
        .create_role(create_input("Broken", &["user_view", "unknown"]));

    let catalog = PermissionCatalog::standard();
    for role in harness.service.list_roles().unwrap_or_default() {
        assert!(catalog.validate_references(role.permissions().iter()).is_ok());
    }
}

#[test]
fn notifications_cover_success_and_failure() {
    let mut harness = harness(RoleServiceConfig::default());
    let role = created(&mut harness.service, "Clerk", &["approval_view"]);
    let _ = harness.service.create_role(create_input("", &["approval_view"]));

    let notifications = harness.notifier.recorded();
    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications[0].action, RoleAction::Created);
    assert_eq!(notifications[0].outcome, NotificationOutcome::Success);
    assert_eq!(notifications[0].role_id, Some(role.role_id()));
    assert_eq!(notifications[1].outcome, NotificationOutcome::Failure);
    assert_eq!(notifications[1].role_id, None);
}

#[test]
fn list_roles_matching_filters_by_search_and_status() {
    let mut harness = harness(RoleServiceConfig::default());
    created(&mut harness.service, "Grievance Officer", &["grievance_view"]);
    let scheme = created(&mut harness.service, "Scheme Coordinator", &["scheme_view"]);
    created(&mut harness.service, "Poll Manager", &["poll_view"]);
    let _ = harness.service.toggle_role_status(scheme.role_id());

    let searched = harness.service.list_roles_matching(&RoleListQuery {
        search: Some("OFFICER".to_owned()),
        status: None,
    });
    assert_eq!(
        searched
            .unwrap_or_default()
            .iter()
            .map(|role| role.name().as_str().to_owned())
            .collect::<Vec<_>>(),
        vec!["Grievance Officer".to_owned()]
    );

    let inactive = harness.service.list_roles_matching(&RoleListQuery {
        search: None,
        status: Some(RoleStatus::Inactive),
    });
    assert_eq!(inactive.unwrap_or_default().len(), 1);

    let by_description = harness.service.list_roles_matching(&RoleListQuery {
        search: Some("manager description".to_owned()),
        status: Some(RoleStatus::Active),
    });
    assert_eq!(by_description.unwrap_or_default().len(), 1);
}

#[test]
fn assignments_adjust_user_count() {
    let mut harness = harness(RoleServiceConfig::default());
    let role = created(&mut harness.service, "Staff", &["grievance_view"]);

    assert!(harness.service.assign_role(role.role_id(), "asha").is_ok());
    assert!(harness.service.assign_role(role.role_id(), "ravi").is_ok());
    let duplicate = harness.service.assign_role(role.role_id(), "asha");
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let summary = harness.service.role_summary().unwrap_or_default();
    assert_eq!(summary.total_users, 2);

    assert!(harness.service.unassign_role(role.role_id(), "asha").is_ok());
    let second_removal = harness.service.unassign_role(role.role_id(), "asha");
    assert!(matches!(second_removal, Err(AppError::NotFound(_))));

    let stored = harness.service.find_role(role.role_id());
    assert_eq!(stored.ok().map(|role| role.user_count()), Some(1));
    assert_eq!(
        harness.service.list_role_assignments().unwrap_or_default().len(),
        1
    );
}

#[test]
fn unassignment_message_uses_current_role_name() {
    let mut harness = harness(RoleServiceConfig::default());
    let role = created(&mut harness.service, "Staff", &["grievance_view"]);
    assert!(harness.service.assign_role(role.role_id(), "asha").is_ok());
    let renamed = harness.service.update_role(
        role.role_id(),
        UpdateRoleInput {
            name: "Ward Staff".to_owned(),
            description: String::new(),
            permissions: ["grievance_view"].into_iter().collect(),
        },
    );
    assert!(renamed.is_ok());

    assert!(harness.service.unassign_role(role.role_id(), "asha").is_ok());

    let notifications = harness.notifier.recorded();
    let last = notifications.last().map(|notification| notification.message.clone());
    assert_eq!(
        last.as_deref(),
        Some("Removed role 'Ward Staff' from 'asha'")
    );
}

#[test]
fn failed_count_update_rolls_back_assignment_changes() {
    let mut harness = harness(RoleServiceConfig::default());
    let role = created(&mut harness.service, "Staff", &["grievance_view"]);
    assert!(harness.service.assign_role(role.role_id(), "ravi").is_ok());
    harness.reject_role_updates.store(true, Ordering::SeqCst);

    let assigned = harness.service.assign_role(role.role_id(), "asha");
    assert!(matches!(assigned, Err(AppError::Internal(_))));
    let unassigned = harness.service.unassign_role(role.role_id(), "ravi");
    assert!(matches!(unassigned, Err(AppError::Internal(_))));

    let subjects: Vec<String> = harness
        .service
        .list_role_assignments()
        .unwrap_or_default()
        .iter()
        .map(|assignment| assignment.subject().to_owned())
        .collect();
    assert_eq!(subjects, vec!["ravi".to_owned()]);
    let stored = harness.service.find_role(role.role_id());
    assert_eq!(stored.ok().map(|role| role.user_count()), Some(1));
}

#[test]
fn inactive_roles_cannot_be_assigned() {
    let mut harness = harness(RoleServiceConfig::default());
    let role = created(&mut harness.service, "Staff", &["grievance_view"]);
    let _ = harness.service.toggle_role_status(role.role_id());

    let result = harness.service.assign_role(role.role_id(), "asha");

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn role_summary_counts_statuses() {
    let mut harness = harness(RoleServiceConfig::default());
    created(&mut harness.service, "One", &["user_view"]);
    let two = created(&mut harness.service, "Two", &["user_view"]);
    created(&mut harness.service, "Three", &["user_view"]);
    let _ = harness.service.toggle_role_status(two.role_id());

    let summary = harness.service.role_summary().unwrap_or_default();

    assert_eq!(summary.total_roles, 3);
    assert_eq!(summary.active_roles, 2);
    assert_eq!(summary.inactive_roles, 1);
}
