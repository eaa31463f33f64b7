use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use mla_connect_core::{AppError, AppResult, RoleId};
use mla_connect_domain::{PermissionCatalog, PermissionSet, Role};

use crate::role_ports::{
    NotificationOutcome, RoleAction, RoleNotification, RoleNotifier, RoleRepository,
};

mod assignments;
mod roles;

#[cfg(test)]
mod tests;

/// Behaviour switches for the role service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleServiceConfig {
    /// Allows two roles to share a name.
    pub allow_duplicate_names: bool,
}

impl Default for RoleServiceConfig {
    fn default() -> Self {
        Self {
            allow_duplicate_names: true,
        }
    }
}

/// Authoritative role collection for one administration session.
pub struct RoleService {
    catalog: Arc<PermissionCatalog>,
    repository: Box<dyn RoleRepository>,
    notifier: Arc<dyn RoleNotifier>,
    config: RoleServiceConfig,
}

impl RoleService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        catalog: Arc<PermissionCatalog>,
        repository: Box<dyn RoleRepository>,
        notifier: Arc<dyn RoleNotifier>,
        config: RoleServiceConfig,
    ) -> Self {
        Self {
            catalog,
            repository,
            notifier,
            config,
        }
    }

    /// Returns the permission catalog roles are validated against.
    #[must_use]
    pub fn catalog(&self) -> &PermissionCatalog {
        self.catalog.as_ref()
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> RoleServiceConfig {
        self.config
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    fn require_role(&self, role_id: RoleId) -> AppResult<Role> {
        self.repository
            .find_role(role_id)?
            .ok_or_else(|| AppError::NotFound(format!("role '{role_id}' does not exist")))
    }

    fn require_known_permissions(&self, permissions: &PermissionSet) -> AppResult<()> {
        self.catalog.validate_references(permissions.iter())
    }

    fn require_unique_name(&self, name: &str, except: Option<RoleId>) -> AppResult<()> {
        if self.config.allow_duplicate_names {
            return Ok(());
        }

        let taken = self
            .repository
            .list_roles()?
            .iter()
            .any(|role| Some(role.role_id()) != except && role.has_name(name));
        if taken {
            return Err(AppError::Conflict(format!(
                "a role named '{}' already exists",
                name.trim()
            )));
        }

        Ok(())
    }

    fn report<T>(
        &self,
        action: RoleAction,
        role_id: Option<RoleId>,
        result: AppResult<T>,
        describe_success: impl FnOnce(&T) -> (RoleId, String),
    ) -> AppResult<T> {
        let notification = match &result {
            Ok(value) => {
                let (role_id, message) = describe_success(value);
                RoleNotification {
                    action,
                    outcome: NotificationOutcome::Success,
                    role_id: Some(role_id),
                    message,
                }
            }
            Err(error) => RoleNotification {
                action,
                outcome: NotificationOutcome::Failure,
                role_id,
                message: error.to_string(),
            },
        };
        self.notifier.notify(notification);

        result
    }
}
