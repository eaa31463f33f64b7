use mla_connect_application::{CreateRoleInput, RoleSummary, UpdateRoleInput};
use mla_connect_domain::{
    Permission, PermissionCatalog, PermissionId, PermissionModule, Role, module_selection,
};

use super::types::{
    CreateRoleRequest, ModuleSelectionResponse, PermissionModuleResponse, PermissionResponse,
    RoleResponse, RoleSummaryResponse, RolesPageResponse, UpdateRoleRequest,
};

impl From<CreateRoleRequest> for CreateRoleInput {
    fn from(value: CreateRoleRequest) -> Self {
        Self {
            name: value.name,
            description: value.description,
            permissions: value
                .permissions
                .into_iter()
                .map(PermissionId::from)
                .collect(),
        }
    }
}

impl From<UpdateRoleRequest> for UpdateRoleInput {
    fn from(value: UpdateRoleRequest) -> Self {
        Self {
            name: value.name,
            description: value.description,
            permissions: value
                .permissions
                .into_iter()
                .map(PermissionId::from)
                .collect(),
        }
    }
}

impl From<&Permission> for PermissionResponse {
    fn from(value: &Permission) -> Self {
        Self {
            id: value.id().as_str().to_owned(),
            display_name: value.display_name().to_owned(),
            description: value.description().to_owned(),
            module: value.module().as_str().to_owned(),
        }
    }
}

impl From<(PermissionModule, Vec<&Permission>)> for PermissionModuleResponse {
    fn from((module, permissions): (PermissionModule, Vec<&Permission>)) -> Self {
        Self {
            module: module.as_str().to_owned(),
            display_name: module.display_name().to_owned(),
            permissions: permissions.into_iter().map(PermissionResponse::from).collect(),
        }
    }
}

impl From<RoleSummary> for RoleSummaryResponse {
    fn from(value: RoleSummary) -> Self {
        Self {
            total_roles: value.total_roles,
            active_roles: value.active_roles,
            inactive_roles: value.inactive_roles,
            total_users: value.total_users,
        }
    }
}

impl RoleResponse {
    pub fn from_role(role: &Role, catalog: &PermissionCatalog) -> Self {
        Self {
            role_id: role.role_id().to_string(),
            name: role.name().as_str().to_owned(),
            description: role.description().to_owned(),
            status: role.status().as_str().to_owned(),
            permissions: role.permissions().to_tokens(),
            user_count: role.user_count(),
            created_on: role.created_on().format("%Y-%m-%d").to_string(),
            module_selections: catalog
                .modules()
                .into_iter()
                .map(|module| ModuleSelectionResponse {
                    module: module.as_str().to_owned(),
                    selection: module_selection(role.permissions(), module, catalog)
                        .as_str()
                        .to_owned(),
                })
                .collect(),
        }
    }
}

impl PermissionModuleResponse {
    pub fn from_catalog(catalog: &PermissionCatalog) -> Vec<Self> {
        catalog.grouped().into_iter().map(Self::from).collect()
    }
}

impl RolesPageResponse {
    pub fn build(catalog: &PermissionCatalog, roles: &[Role], summary: RoleSummary) -> Self {
        Self {
            modules: PermissionModuleResponse::from_catalog(catalog),
            roles: roles
                .iter()
                .map(|role| RoleResponse::from_role(role, catalog))
                .collect(),
            summary: summary.into(),
        }
    }
}
