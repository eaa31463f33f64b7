mod inputs;
mod notifier;
mod repository;

pub use inputs::{CreateRoleInput, RoleListQuery, RoleSummary, UpdateRoleInput};
pub use notifier::{NotificationOutcome, RoleAction, RoleNotification, RoleNotifier};
pub use repository::RoleRepository;
