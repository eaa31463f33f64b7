use mla_connect_core::{AppResult, RoleId};
use mla_connect_domain::{Role, RoleAssignment};

/// Storage port for the role collection of one session.
///
/// Implementations keep insertion order for roles and assignments.
pub trait RoleRepository: Send {
    /// Lists all roles in insertion order.
    fn list_roles(&self) -> AppResult<Vec<Role>>;

    /// Finds a role by identifier.
    fn find_role(&self, role_id: RoleId) -> AppResult<Option<Role>>;

    /// Appends a new role. Fails with a conflict if the identifier is taken.
    fn insert_role(&mut self, role: Role) -> AppResult<()>;

    /// Replaces a stored role. Fails with not found if it does not exist.
    fn update_role(&mut self, role: Role) -> AppResult<()>;

    /// Lists role assignments in insertion order.
    fn list_assignments(&self) -> AppResult<Vec<RoleAssignment>>;

    /// Records an assignment. Fails with a conflict if the subject already
    /// holds the role.
    fn insert_assignment(&mut self, assignment: RoleAssignment) -> AppResult<()>;

    /// Removes an assignment and returns it, if it existed.
    fn remove_assignment(
        &mut self,
        role_id: RoleId,
        subject: &str,
    ) -> AppResult<Option<RoleAssignment>>;
}
