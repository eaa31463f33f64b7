//! Notification adapter that writes role outcomes to tracing output.

use mla_connect_application::{NotificationOutcome, RoleNotification, RoleNotifier};
use tracing::{info, warn};

/// Notifier that logs every role notification.
#[derive(Debug, Clone, Default)]
pub struct TracingRoleNotifier;

impl TracingRoleNotifier {
    /// Creates a new tracing notifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RoleNotifier for TracingRoleNotifier {
    fn notify(&self, notification: RoleNotification) {
        let role_id = notification
            .role_id
            .map(|role_id| role_id.to_string())
            .unwrap_or_default();

        match notification.outcome {
            NotificationOutcome::Success => info!(
                action = notification.action.as_str(),
                role_id = %role_id,
                "{}",
                notification.message
            ),
            NotificationOutcome::Failure => warn!(
                action = notification.action.as_str(),
                role_id = %role_id,
                "{}",
                notification.message
            ),
        }
    }
}
