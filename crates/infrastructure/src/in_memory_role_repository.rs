use mla_connect_application::RoleRepository;
use mla_connect_core::{AppError, AppResult, RoleId};
use mla_connect_domain::{Role, RoleAssignment};

#[cfg(test)]
mod tests;

/// In-memory role repository holding one session's roles.
#[derive(Debug, Default)]
pub struct InMemoryRoleRepository {
    roles: Vec<Role>,
    assignments: Vec<RoleAssignment>,
}

impl InMemoryRoleRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            roles: Vec::new(),
            assignments: Vec::new(),
        }
    }

    /// Creates a repository pre-filled with roles, rejecting duplicate ids.
    pub fn with_roles(roles: impl IntoIterator<Item = Role>) -> AppResult<Self> {
        let mut repository = Self::new();
        for role in roles {
            repository.insert_role(role)?;
        }

        Ok(repository)
    }

    fn position(&self, role_id: RoleId) -> Option<usize> {
        self.roles.iter().position(|role| role.role_id() == role_id)
    }
}

impl RoleRepository for InMemoryRoleRepository {
    fn list_roles(&self) -> AppResult<Vec<Role>> {
        Ok(self.roles.clone())
    }

    fn find_role(&self, role_id: RoleId) -> AppResult<Option<Role>> {
        Ok(self.position(role_id).map(|index| self.roles[index].clone()))
    }

    fn insert_role(&mut self, role: Role) -> AppResult<()> {
        if self.position(role.role_id()).is_some() {
            return Err(AppError::Conflict(format!(
                "role '{}' already exists",
                role.role_id()
            )));
        }

        self.roles.push(role);
        Ok(())
    }

    fn update_role(&mut self, role: Role) -> AppResult<()> {
        let index = self.position(role.role_id()).ok_or_else(|| {
            AppError::NotFound(format!("role '{}' does not exist", role.role_id()))
        })?;

        self.roles[index] = role;
        Ok(())
    }

    fn list_assignments(&self) -> AppResult<Vec<RoleAssignment>> {
        Ok(self.assignments.clone())
    }

    fn insert_assignment(&mut self, assignment: RoleAssignment) -> AppResult<()> {
        let exists = self.assignments.iter().any(|stored| {
            stored.role_id() == assignment.role_id() && stored.subject() == assignment.subject()
        });
        if exists {
            return Err(AppError::Conflict(format!(
                "subject '{}' already holds role '{}'",
                assignment.subject(),
                assignment.role_id()
            )));
        }

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
