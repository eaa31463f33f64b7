use super::*;

use crate::role_ports::{CreateRoleInput, RoleListQuery, RoleSummary, UpdateRoleInput};

impl RoleService {
    /// Returns all roles in creation order.
    pub fn list_roles(&self) -> AppResult<Vec<Role>> {
        self.repository.list_roles()
    }

    /// Returns one role or a not-found error.
    pub fn find_role(&self, role_id: RoleId) -> AppResult<Role> {
        self.require_role(role_id)
    }

    /// Returns roles passing the query filters, in creation order.
    pub fn list_roles_matching(&self, query: &RoleListQuery) -> AppResult<Vec<Role>> {
        Ok(self
            .repository
            .list_roles()?
            .into_iter()
            .filter(|role| query.matches(role))
            .collect())
    }

    /// Returns the counters shown above the role table.
    pub fn role_summary(&self) -> AppResult<RoleSummary> {
        Ok(RoleSummary::from_roles(&self.repository.list_roles()?))
    }

    /// Creates an active role without users.
    pub fn create_role(&mut self, input: CreateRoleInput) -> AppResult<Role> {
        let result = self.try_create_role(input);
        self.report(RoleAction::Created, None, result, |role| {
            (
                role.role_id(),
                format!("Role '{}' created successfully", role.name()),
            )
        })
    }

    /// Replaces a role's name, description and permissions.
    pub fn update_role(&mut self, role_id: RoleId, input: UpdateRoleInput) -> AppResult<Role> {
        let result = self.try_update_role(role_id, input);
        self.report(RoleAction::Updated, Some(role_id), result, |role| {
            (
                role.role_id(),
                format!("Role '{}' updated successfully", role.name()),
            )
        })
    }

    /// Flips a role between active and inactive.
    pub fn toggle_role_status(&mut self, role_id: RoleId) -> AppResult<Role> {
        let result = self.try_toggle_role_status(role_id);
        self.report(RoleAction::StatusChanged, Some(role_id), result, |role| {
            (
                role.role_id(),
                format!("Role '{}' is now {}", role.name(), role.status().as_str()),
            )
        })
    }

    fn try_create_role(&mut self, input: CreateRoleInput) -> AppResult<Role> {
        let role = Role::new(
            RoleId::new(),
            input.name,
            input.description,
            input.permissions,
            Self::today(),
        )?;
        self.require_known_permissions(role.permissions())?;
        self.require_unique_name(role.name().as_str(), None)?;

        self.repository.insert_role(role.clone())?;
        Ok(role)
    }

    fn try_update_role(&mut self, role_id: RoleId, input: UpdateRoleInput) -> AppResult<Role> {
        let mut role = self.require_role(role_id)?;
        role.update_details(input.name, input.description, input.permissions)?;
        self.require_known_permissions(role.permissions())?;
        self.require_unique_name(role.name().as_str(), Some(role_id))?;

        self.repository.update_role(role.clone())?;
        Ok(role)
    }

    fn try_toggle_role_status(&mut self, role_id: RoleId) -> AppResult<Role> {
        let mut role = self.require_role(role_id)?;
        role.toggle_status();

        self.repository.update_role(role.clone())?;
        Ok(role)
    }
}
