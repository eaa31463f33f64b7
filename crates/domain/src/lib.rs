//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod permission;
mod role;
mod selection;

pub use permission::{Permission, PermissionCatalog, PermissionId, PermissionModule};
pub use role::{Role, RoleAssignment, RoleStatus};
pub use selection::{
    ModuleSelection, PermissionSet, clear, module_selection, select_all, toggle_module,
    toggle_permission,
};
