use super::*;

use mla_connect_domain::RoleAssignment;

impl RoleService {
    /// Returns role assignments in the order they were made.
    pub fn list_role_assignments(&self) -> AppResult<Vec<RoleAssignment>> {
        self.repository.list_assignments()
    }

    /// Gives a subject an active role and bumps the role's user count.
    pub fn assign_role(&mut self, role_id: RoleId, subject: &str) -> AppResult<RoleAssignment> {
        let result = self.try_assign_role(role_id, subject);
        self.report(RoleAction::Assigned, Some(role_id), result, |(role, assignment)| {
            (
                role.role_id(),
                format!(
                    "Assigned role '{}' to '{}'",
                    role.name(),
                    assignment.subject()
                ),
            )
        })
        .map(|(_, assignment)| assignment)
    }

    /// Removes a role from a subject and lowers the role's user count.
    pub fn unassign_role(&mut self, role_id: RoleId, subject: &str) -> AppResult<RoleAssignment> {
        let result = self.try_unassign_role(role_id, subject);
        self.report(RoleAction::Unassigned, Some(role_id), result, |(role, assignment)| {
            (
                role.role_id(),
                format!(
                    "Removed role '{}' from '{}'",
                    role.name(),
                    assignment.subject()
                ),
            )
        })
        .map(|(_, assignment)| assignment)
    }

    fn try_assign_role(
        &mut self,
        role_id: RoleId,
        subject: &str,
    ) -> AppResult<(Role, RoleAssignment)> {
        let mut role = self.require_role(role_id)?;
        if !role.is_active() {
            return Err(AppError::Validation(format!(
                "role '{}' is inactive and cannot be assigned",
                role.name()
            )));
        }

        let assignment = RoleAssignment::new(subject, &role, Self::today())?;
        self.repository.insert_assignment(assignment.clone())?;

        role.record_assignment();
        if let Err(error) = self.repository.update_role(role.clone()) {
            self.repository
                .remove_assignment(role_id, assignment.subject())?;
            return Err(error);
        }

        Ok((role, assignment))
    }

    fn try_unassign_role(
        &mut self,
        role_id: RoleId,
        subject: &str,
    ) -> AppResult<(Role, RoleAssignment)> {
        let mut role = self.require_role(role_id)?;
        let assignment = self
            .repository
            .remove_assignment(role_id, subject.trim())?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "subject '{}' does not hold role '{}'",
                    subject.trim(),
                    role.name()
                ))
            })?;

        role.record_unassignment();
        if let Err(error) = self.repository.update_role(role.clone()) {
            self.repository.insert_assignment(assignment)?;
            return Err(error);
        }

        Ok((role, assignment))
    }
}
