use mla_connect_domain::{PermissionSet, Role, RoleStatus};

/// Input payload for creating roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRoleInput {
    /// Role name shown to administrators.
    pub name: String,
    /// Free-text description, may be empty.
    pub description: String,
    /// Grants to attach to the role.
    pub permissions: PermissionSet,
}

/// Input payload for editing roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRoleInput {
    /// Replacement role name.
    pub name: String,
    /// Replacement description.
    pub description: String,
    /// Replacement grants.
    pub permissions: PermissionSet,
}

/// Filters applied to the role list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleListQuery {
    /// Case-insensitive substring matched against name and description.
    pub search: Option<String>,
    /// Only roles in this status.
    pub status: Option<RoleStatus>,
}

impl RoleListQuery {
    /// Returns whether a role passes every filter.
    #[must_use]
    pub fn matches(&self, role: &Role) -> bool {
        if self.status.is_some_and(|status| status != role.status()) {
            return false;
        }

        match self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
        {
            Some(term) => {
                let term = term.to_lowercase();
                role.name().as_str().to_lowercase().contains(term.as_str())
                    || role.description().to_lowercase().contains(term.as_str())
            }
            None => true,
        }
    }
}

/// Counters shown above the role table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleSummary {
    /// Number of roles.
    pub total_roles: usize,
    /// Number of active roles.
    pub active_roles: usize,
    /// Number of inactive roles.
    pub inactive_roles: usize,
    /// Sum of user counts across roles.
    pub total_users: u64,
}

impl RoleSummary {
    /// Computes counters from a role list.
    #[must_use]
    pub fn from_roles(roles: &[Role]) -> Self {
        roles.iter().fold(Self::default(), |mut summary, role| {
            summary.total_roles += 1;
            if role.is_active() {
                summary.active_roles += 1;
            } else {
                summary.inactive_roles += 1;
            }
            summary.total_users += u64::from(role.user_count());
            summary
        })
    }
}
