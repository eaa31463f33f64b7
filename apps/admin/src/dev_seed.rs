use chrono::NaiveDate;
use mla_connect_core::{AppError, AppResult, RoleId};
use mla_connect_domain::{
    PermissionCatalog, PermissionModule, PermissionSet, Role, RoleStatus, select_all,
    toggle_module,
};

struct SeedRole {
    name: &'static str,
    description: &'static str,
    status: RoleStatus,
    user_count: u32,
    created_on: (i32, u32, u32),
}

const SEED_ROLES: &[SeedRole] = &[
    SeedRole {
        name: "Super Admin",
        description: "Full access to every module of MLA Connect",
        status: RoleStatus::Active,
        user_count: 2,
        created_on: (2024, 1, 10),
    },
    SeedRole {
        name: "MLA Office Staff",
        description: "Handles grievances, approvals and constituency projects",
        status: RoleStatus::Active,
        user_count: 8,
        created_on: (2024, 1, 18),
    },
    SeedRole {
        name: "Content Manager",
        description: "Publishes announcements and runs citizen polls",
        status: RoleStatus::Active,
        user_count: 3,
        created_on: (2024, 2, 5),
    },
    SeedRole {
        name: "Field Volunteer",
        description: "Views grievances and schemes during ward visits",
        status: RoleStatus::Inactive,
        user_count: 0,
        created_on: (2024, 3, 12),
    },
];

/// Builds the sample roles shown on a fresh roles page.
pub fn sample_roles(catalog: &PermissionCatalog) -> AppResult<Vec<Role>> {
    SEED_ROLES
        .iter()
        .map(|seed| {
            let permissions = seed_permissions(seed.name, catalog);
            catalog.validate_references(permissions.iter())?;

            let (year, month, day) = seed.created_on;
            let created_on = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                AppError::Internal(format!("invalid seed date for role '{}'", seed.name))
            })?;

            Ok(
                Role::new(RoleId::new(), seed.name, seed.description, permissions, created_on)?
                    .with_status(seed.status)
                    .with_user_count(seed.user_count),
            )
        })
        .collect()
}

fn seed_permissions(name: &str, catalog: &PermissionCatalog) -> PermissionSet {
    let modules: &[PermissionModule] = match name {
        "Super Admin" => return select_all(catalog),
        "MLA Office Staff" => &[
            PermissionModule::GrievanceManagement,
            PermissionModule::Approvals,
            PermissionModule::ProjectManagement,
        ],
        "Content Manager" => &[
            PermissionModule::ContentManagement,
            PermissionModule::PollsAndSurveys,
        ],
        _ => return ["grievance_view", "scheme_view"].into_iter().collect(),
    };

    modules
        .iter()
        .fold(PermissionSet::new(), |selection, module| {
            toggle_module(&selection, *module, catalog)
        })
}
