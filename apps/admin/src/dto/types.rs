use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for role creation.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/admin-types/src/generated/create-role-request.ts"
)]
pub struct CreateRoleRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub permissions: Vec<String>,
}

/// Incoming payload for editing a role.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/admin-types/src/generated/update-role-request.ts"
)]
pub struct UpdateRoleRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub permissions: Vec<String>,
}

/// Catalog entry rendered as one permission checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/admin-types/src/generated/permission-response.ts"
)]
pub struct PermissionResponse {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub module: String,
}

/// Permission group rendered under one module header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/admin-types/src/generated/permission-module-response.ts"
)]
pub struct PermissionModuleResponse {
    pub module: String,
    pub display_name: String,
    pub permissions: Vec<PermissionResponse>,
}

/// Header checkbox state of one module for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/admin-types/src/generated/module-selection-response.ts"
)]
pub struct ModuleSelectionResponse {
    pub module: String,
    pub selection: String,
}

/// API representation of a role row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/admin-types/src/generated/role-response.ts"
)]
pub struct RoleResponse {
    pub role_id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub permissions: Vec<String>,
    pub user_count: u32,
    pub created_on: String,
    pub module_selections: Vec<ModuleSelectionResponse>,
}

/// Counters shown above the role table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/admin-types/src/generated/role-summary-response.ts"
)]
pub struct RoleSummaryResponse {
    pub total_roles: usize,
    pub active_roles: usize,
    pub inactive_roles: usize,
    #[ts(type = "number")]
    pub total_users: u64,
}

/// Everything the roles-and-permissions page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/admin-types/src/generated/roles-page-response.ts"
)]
pub struct RolesPageResponse {
    pub modules: Vec<PermissionModuleResponse>,
    pub roles: Vec<RoleResponse>,
    pub summary: RoleSummaryResponse,
}
