//! Application services and ports.

#![forbid(unsafe_code)]

mod role_ports;
mod role_service;

pub use role_ports::{
    CreateRoleInput, NotificationOutcome, RoleAction, RoleListQuery, RoleNotification,
    RoleNotifier, RoleRepository, RoleSummary, UpdateRoleInput,
};
pub use role_service::{RoleService, RoleServiceConfig};
