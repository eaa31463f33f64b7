mod conversions;
mod types;

pub use types::{
    CreateRoleRequest, PermissionModuleResponse, RoleResponse, RolesPageResponse,
    UpdateRoleRequest,
};
