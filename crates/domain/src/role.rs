use std::str::FromStr;

use chrono::NaiveDate;
use mla_connect_core::{AppError, AppResult, NonEmptyString, RoleId};
use serde::{Deserialize, Serialize};

use crate::selection::PermissionSet;

/// Whether a role can currently be handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleStatus {
    /// Role is in use.
    Active,
    /// Role is kept but disabled.
    Inactive,
}

impl RoleStatus {
    /// Returns a stable storage value for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Returns the opposite status.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

impl FromStr for RoleStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(AppError::Validation(format!(
                "unknown role status '{value}'"
            ))),
        }
    }
}

/// Named bundle of permissions assignable to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Role {
    role_id: RoleId,
    name: NonEmptyString,
    description: String,
    status: RoleStatus,
    permissions: PermissionSet,
    user_count: u32,
    created_on: NaiveDate,
}

impl Role {
    /// Creates an active role with no users.
    ///
    /// Catalog membership of `permissions` is checked by the role service,
    /// not here.
    pub fn new(
        role_id: RoleId,
        name: impl Into<String>,
        description: impl Into<String>,
        permissions: PermissionSet,
        created_on: NaiveDate,
    ) -> AppResult<Self> {
        let name = validated_name(name)?;
        ensure_permissions_selected(&permissions)?;

        Ok(Self {
            role_id,
            name,
            description: description.into().trim().to_owned(),
            status: RoleStatus::Active,
            permissions,
            user_count: 0,
            created_on,
        })
    }

    /// Replaces the status, used when restoring existing roles.
    #[must_use]
    pub fn with_status(mut self, status: RoleStatus) -> Self {
        self.status = status;
        self
    }

    /// Replaces the recorded user count, used when restoring existing roles.
    #[must_use]
    pub fn with_user_count(mut self, user_count: u32) -> Self {
        self.user_count = user_count;
        self
    }

    /// Returns the role identifier.
    #[must_use]
    pub fn role_id(&self) -> RoleId {
        self.role_id
    }

    /// Returns the role name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the role description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> RoleStatus {
        self.status
    }

    /// Returns whether the role is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == RoleStatus::Active
    }

    /// Returns the granted permissions.
    #[must_use]
    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    /// Returns the number of users holding the role.
    #[must_use]
    pub fn user_count(&self) -> u32 {
        self.user_count
    }

    /// Returns the creation date.
    #[must_use]
    pub fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    /// Replaces name, description and permissions.
    ///
    /// The role is left untouched when validation fails.
    pub fn update_details(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        permissions: PermissionSet,
    ) -> AppResult<()> {
        let name = validated_name(name)?;
        ensure_permissions_selected(&permissions)?;

        self.name = name;
        self.description = description.into().trim().to_owned();
        self.permissions = permissions;
        Ok(())
    }

    /// Flips between active and inactive and returns the new status.
    pub fn toggle_status(&mut self) -> RoleStatus {
        self.status = self.status.toggled();
        self.status
    }

    /// Counts one more user holding the role.
    pub fn record_assignment(&mut self) {
        self.user_count = self.user_count.saturating_add(1);
    }

    /// Counts one user fewer holding the role.
    pub fn record_unassignment(&mut self) {
        self.user_count = self.user_count.saturating_sub(1);
    }

    /// Returns whether `name` matches this role's name, ignoring case and
    /// surrounding whitespace.
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.name.as_str().trim().to_lowercase() == name.trim().to_lowercase()
    }
}

fn validated_name(name: impl Into<String>) -> AppResult<NonEmptyString> {
    let name = name.into();
    NonEmptyString::new(name.trim())
        .map_err(|_| AppError::Validation("role name must not be empty".to_owned()))
}

fn ensure_permissions_selected(permissions: &PermissionSet) -> AppResult<()> {
    if permissions.is_empty() {
        return Err(AppError::Validation(
            "a role requires at least one permission".to_owned(),
        ));
    }

    Ok(())
}

/// A subject holding a role.
///
/// Only the role identifier is kept, so renaming the role never leaves a
/// stale name behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleAssignment {
    subject: NonEmptyString,
    role_id: RoleId,
    assigned_on: NaiveDate,
}

impl RoleAssignment {
    /// Creates a validated assignment.
    pub fn new(
        subject: impl Into<String>,
        role: &Role,
        assigned_on: NaiveDate,
    ) -> AppResult<Self> {
        let subject = subject.into();
        let subject = NonEmptyString::new(subject.trim())
            .map_err(|_| AppError::Validation("subject must not be empty".to_owned()))?;

        Ok(Self {
            subject,
            role_id: role.role_id(),
            assigned_on,
        })
    }

    /// Returns the subject holding the role.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }

    /// Returns the assigned role identifier.
    #[must_use]
    pub fn role_id(&self) -> RoleId {
        self.role_id
    }

    /// Returns the assignment date.
    #[must_use]
    pub fn assigned_on(&self) -> NaiveDate {
        self.assigned_on
    }
}
