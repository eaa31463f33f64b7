use mla_connect_core::RoleId;

/// Role operations reported to the notification surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleAction {
    /// A role was created.
    Created,
    /// A role's details or permissions were edited.
    Updated,
    /// A role was activated or deactivated.
    StatusChanged,
    /// A role was assigned to a subject.
    Assigned,
    /// A role was removed from a subject.
    Unassigned,
}

impl RoleAction {
    /// Returns a stable value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "role.created",
            Self::Updated => "role.updated",
            Self::StatusChanged => "role.status_changed",
            Self::Assigned => "role.assigned",
            Self::Unassigned => "role.unassigned",
        }
    }
}

/// Whether the reported operation went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationOutcome {
    /// The operation was applied.
    Success,
    /// The operation was rejected.
    Failure,
}

/// Message delivered to the notification surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleNotification {
    /// Operation being reported.
    pub action: RoleAction,
    /// Result of the operation.
    pub outcome: NotificationOutcome,
    /// Affected role, when known.
    pub role_id: Option<RoleId>,
    /// Human-readable message.
    pub message: String,
}

/// Port for the toast/notification surface.
pub trait RoleNotifier: Send + Sync {
    /// Delivers one notification.
    fn notify(&self, notification: RoleNotification);
}
