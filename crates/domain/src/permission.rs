use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use mla_connect_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Stable token identifying one permission, for example `user_view`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionId(String);

impl PermissionId {
    /// Creates a permission identifier from a token.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for PermissionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PermissionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for PermissionId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}

/// Fixed categories used to group permissions on the roles page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionModule {
    /// Citizen and staff account administration.
    UserManagement,
    /// Announcements, news and media content.
    ContentManagement,
    /// Citizen grievance intake and resolution.
    GrievanceManagement,
    /// Constituency development projects.
    ProjectManagement,
    /// Government welfare schemes.
    SchemeManagement,
    /// Approval workflow decisions.
    Approvals,
    /// Polls, surveys and voice feedback.
    PollsAndSurveys,
    /// Dashboards and exported reports.
    ReportsAndAnalytics,
    /// Application settings, roles and permissions.
    SystemSettings,
}

impl PermissionModule {
    /// Returns a stable storage value for this module.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserManagement => "user_management",
            Self::ContentManagement => "content_management",
            Self::GrievanceManagement => "grievance_management",
            Self::ProjectManagement => "project_management",
            Self::SchemeManagement => "scheme_management",
            Self::Approvals => "approvals",
            Self::PollsAndSurveys => "polls_and_surveys",
            Self::ReportsAndAnalytics => "reports_and_analytics",
            Self::SystemSettings => "system_settings",
        }
    }

    /// Returns the label shown above the module's permission group.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::UserManagement => "User Management",
            Self::ContentManagement => "Content Management",
            Self::GrievanceManagement => "Grievance Management",
            Self::ProjectManagement => "Project Management",
            Self::SchemeManagement => "Scheme Management",
            Self::Approvals => "Approvals",
            Self::PollsAndSurveys => "Polls & Surveys",
            Self::ReportsAndAnalytics => "Reports & Analytics",
            Self::SystemSettings => "System Settings",
        }
    }

    /// Returns all modules in display order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[PermissionModule] = &[
            PermissionModule::UserManagement,
            PermissionModule::ContentManagement,
            PermissionModule::GrievanceManagement,
            PermissionModule::ProjectManagement,
            PermissionModule::SchemeManagement,
            PermissionModule::Approvals,
            PermissionModule::PollsAndSurveys,
            PermissionModule::ReportsAndAnalytics,
            PermissionModule::SystemSettings,
        ];

        ALL
    }
}

impl FromStr for PermissionModule {
    type Err = AppError;

    /// Accepts either the storage value or the display name.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Self::all()
            .iter()
            .copied()
            .find(|module| module.as_str() == value || module.display_name() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown permission module '{value}'")))
    }
}

/// Catalog entry describing one selectable capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    id: PermissionId,
    display_name: String,
    description: String,
    module: PermissionModule,
}

impl Permission {
    /// Creates a catalog entry.
    #[must_use]
    pub fn new(
        id: impl Into<PermissionId>,
        display_name: impl Into<String>,
        description: impl Into<String>,
        module: PermissionModule,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            description: description.into(),
            module,
        }
    }

    /// Returns the unique permission token.
    #[must_use]
    pub fn id(&self) -> &PermissionId {
        &self.id
    }

    /// Returns the short label.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the owning module.
    #[must_use]
    pub fn module(&self) -> PermissionModule {
        self.module
    }
}

const STANDARD_PERMISSIONS: &[(&str, &str, &str, PermissionModule)] = &[
    (
        "user_view",
        "View Users",
        "View citizen and staff accounts",
        PermissionModule::UserManagement,
    ),
    (
        "user_create",
        "Create Users",
        "Register new staff accounts",
        PermissionModule::UserManagement,
    ),
    (
        "user_edit",
        "Edit Users",
        "Update account details and roles",
        PermissionModule::UserManagement,
    ),
    (
        "user_delete",
        "Delete Users",
        "Deactivate or remove accounts",
        PermissionModule::UserManagement,
    ),
    (
        "content_view",
        "View Content",
        "View announcements and media",
        PermissionModule::ContentManagement,
    ),
    (
        "content_create",
        "Create Content",
        "Draft announcements and media",
        PermissionModule::ContentManagement,
    ),
    (
        "content_edit",
        "Edit Content",
        "Modify existing content",
        PermissionModule::ContentManagement,
    ),
    (
        "content_delete",
        "Delete Content",
        "Remove published content",
        PermissionModule::ContentManagement,
    ),
    (
        "content_publish",
        "Publish Content",
        "Publish drafts to citizens",
        PermissionModule::ContentManagement,
    ),
    (
        "grievance_view",
        "View Grievances",
        "View submitted grievances",
        PermissionModule::GrievanceManagement,
    ),
    (
        "grievance_assign",
        "Assign Grievances",
        "Route grievances to officers",
        PermissionModule::GrievanceManagement,
    ),
    (
        "grievance_resolve",
        "Resolve Grievances",
        "Update status and close grievances",
        PermissionModule::GrievanceManagement,
    ),
    (
        "grievance_escalate",
        "Escalate Grievances",
        "Escalate grievances to the MLA office",
        PermissionModule::GrievanceManagement,
    ),
    (
        "project_view",
        "View Projects",
        "View constituency projects",
        PermissionModule::ProjectManagement,
    ),
    (
        "project_create",
        "Create Projects",
        "Add new development projects",
        PermissionModule::ProjectManagement,
    ),
    (
        "project_edit",
        "Edit Projects",
        "Update budgets and progress",
        PermissionModule::ProjectManagement,
    ),
    (
        "scheme_view",
        "View Schemes",
        "View welfare schemes",
        PermissionModule::SchemeManagement,
    ),
    (
        "scheme_create",
        "Create Schemes",
        "Add welfare schemes",
        PermissionModule::SchemeManagement,
    ),
    (
        "scheme_edit",
        "Edit Schemes",
        "Update eligibility and benefits",
        PermissionModule::SchemeManagement,
    ),
    (
        "approval_view",
        "View Approvals",
        "View pending approval requests",
        PermissionModule::Approvals,
    ),
    (
        "approval_decide",
        "Decide Approvals",
        "Approve or reject requests",
        PermissionModule::Approvals,
    ),
    (
        "poll_view",
        "View Polls",
        "View polls and survey results",
        PermissionModule::PollsAndSurveys,
    ),
    (
        "poll_create",
        "Create Polls",
        "Launch polls and surveys",
        PermissionModule::PollsAndSurveys,
    ),
    (
        "poll_close",
        "Close Polls",
        "Close running polls",
        PermissionModule::PollsAndSurveys,
    ),
    (
        "report_view",
        "View Reports",
        "View dashboards and analytics",
        PermissionModule::ReportsAndAnalytics,
    ),
    (
        "report_export",
        "Export Reports",
        "Download report exports",
        PermissionModule::ReportsAndAnalytics,
    ),
    (
        "settings_view",
        "View Settings",
        "View application settings",
        PermissionModule::SystemSettings,
    ),
    (
        "settings_edit",
        "Edit Settings",
        "Change application settings",
        PermissionModule::SystemSettings,
    ),
    (
        "role_manage",
        "Manage Roles",
        "Create and edit roles and permissions",
        PermissionModule::SystemSettings,
    ),
];

/// Immutable set of permissions available when composing roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCatalog {
    permissions: Vec<Permission>,
}

impl PermissionCatalog {
    /// Creates a catalog, rejecting duplicate permission identifiers.
    pub fn new(permissions: Vec<Permission>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(permissions.len());
        for permission in &permissions {
            if !seen.insert(permission.id().as_str()) {
                return Err(AppError::Conflict(format!(
                    "duplicate permission '{}' in catalog",
                    permission.id()
                )));
            }
        }

        Ok(Self { permissions })
    }

    /// Returns the catalog shipped with MLA Connect.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            permissions: STANDARD_PERMISSIONS
                .iter()
                .map(|(id, display_name, description, module)| {
                    Permission::new(*id, *display_name, *description, *module)
                })
                .collect(),
        }
    }

    /// Returns every permission in declaration order.
    #[must_use]
    pub fn list_all(&self) -> &[Permission] {
        self.permissions.as_slice()
    }

    /// Returns the permissions of one module in declaration order.
    pub fn list_by_module(&self, module: PermissionModule) -> impl Iterator<Item = &Permission> {
        self.permissions
            .iter()
            .filter(move |permission| permission.module() == module)
    }

    /// Returns the permissions of a module looked up by name.
    ///
    /// Unknown module names yield an empty list.
    #[must_use]
    pub fn list_by_module_name(&self, module_name: &str) -> Vec<&Permission> {
        match PermissionModule::from_str(module_name) {
            Ok(module) => self.list_by_module(module).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Returns the identifiers of one module in declaration order.
    #[must_use]
    pub fn module_permission_ids(&self, module: PermissionModule) -> Vec<&PermissionId> {
        self.list_by_module(module).map(Permission::id).collect()
    }

    /// Returns modules that own at least one permission, in display order.
    #[must_use]
    pub fn modules(&self) -> Vec<PermissionModule> {
        PermissionModule::all()
            .iter()
            .copied()
            .filter(|module| self.list_by_module(*module).next().is_some())
            .collect()
    }

    /// Returns non-empty module groups in display order.
    #[must_use]
    pub fn grouped(&self) -> Vec<(PermissionModule, Vec<&Permission>)> {
        self.modules()
            .into_iter()
            .map(|module| (module, self.list_by_module(module).collect()))
            .collect()
    }

    /// Finds a permission by identifier.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Permission> {
        self.permissions
            .iter()
            .find(|permission| permission.id().as_str() == id)
    }

    /// Returns whether the identifier exists in the catalog.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Fails on the first identifier that is not part of the catalog.
    pub fn validate_references<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a PermissionId>,
    ) -> AppResult<()> {
        for id in ids {
            if !self.contains(id.as_str()) {
                return Err(AppError::InvalidPermissionReference(format!(
                    "permission '{id}' does not exist in the catalog"
                )));
            }
        }

        Ok(())
    }
}

impl Default for PermissionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
