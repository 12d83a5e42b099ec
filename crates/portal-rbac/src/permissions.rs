#![allow(clippy::match_same_arms)]
//! Permission catalog.
//!
//! Every permission is a `<namespace>.<action>` pair drawn from a closed
//! vocabulary. The catalog is the [`Permission`] enum itself: a pair that has
//! no variant does not exist, so it can never be granted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Feature namespace (the part before the dot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Dashboard,
    Projects,
    ApiKeys,
    Logs,
    Webhooks,
    Customers,
    Intelligence,
    Compliance,
    Reports,
    Billing,
    Team,
    Support,
    Settings,
}

impl Namespace {
    /// All namespaces in catalog order.
    pub const ALL: [Namespace; 13] = [
        Namespace::Dashboard,
        Namespace::Projects,
        Namespace::ApiKeys,
        Namespace::Logs,
        Namespace::Webhooks,
        Namespace::Customers,
        Namespace::Intelligence,
        Namespace::Compliance,
        Namespace::Reports,
        Namespace::Billing,
        Namespace::Team,
        Namespace::Support,
        Namespace::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Dashboard => "dashboard",
            Namespace::Projects => "projects",
            Namespace::ApiKeys => "apikeys",
            Namespace::Logs => "logs",
            Namespace::Webhooks => "webhooks",
            Namespace::Customers => "customers",
            Namespace::Intelligence => "intelligence",
            Namespace::Compliance => "compliance",
            Namespace::Reports => "reports",
            Namespace::Billing => "billing",
            Namespace::Team => "team",
            Namespace::Support => "support",
            Namespace::Settings => "settings",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Namespace::ALL
            .into_iter()
            .find(|ns| ns.as_str() == s)
            .ok_or_else(|| ParseError::UnknownNamespace(s.to_string()))
    }
}

/// Operation within a namespace (the part after the dot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
    Manage,
    Export,
    Revoke,
    Schedule,
    ViewAll,
    Invite,
    Remove,
    ManageRoles,
    Security,
    Integrations,
    DownloadInvoices,
    ViewInvoices,
    CreateTicket,
    Analytics,
}

impl Action {
    /// All actions in vocabulary order.
    pub const ALL: [Action; 18] = [
        Action::View,
        Action::Create,
        Action::Edit,
        Action::Delete,
        Action::Manage,
        Action::Export,
        Action::Revoke,
        Action::Schedule,
        Action::ViewAll,
        Action::Invite,
        Action::Remove,
        Action::ManageRoles,
        Action::Security,
        Action::Integrations,
        Action::DownloadInvoices,
        Action::ViewInvoices,
        Action::CreateTicket,
        Action::Analytics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Manage => "manage",
            Action::Export => "export",
            Action::Revoke => "revoke",
            Action::Schedule => "schedule",
            Action::ViewAll => "viewAll",
            Action::Invite => "invite",
            Action::Remove => "remove",
            Action::ManageRoles => "manageRoles",
            Action::Security => "security",
            Action::Integrations => "integrations",
            Action::DownloadInvoices => "downloadInvoices",
            Action::ViewInvoices => "viewInvoices",
            Action::CreateTicket => "createTicket",
            Action::Analytics => "analytics",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ParseError::UnknownAction(s.to_string()))
    }
}

/// Permission that can be granted to a role.
///
/// Serialized as its dotted identifier, e.g. `"projects.create"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Permission {
    DashboardView,
    DashboardAnalytics,

    ProjectsView,
    ProjectsCreate,
    ProjectsEdit,
    ProjectsDelete,

    ApiKeysView,
    ApiKeysCreate,
    ApiKeysRevoke,

    LogsView,
    LogsExport,

    WebhooksView,
    WebhooksCreate,
    WebhooksEdit,
    WebhooksDelete,

    CustomersView,
    CustomersViewAll,
    CustomersEdit,
    CustomersDelete,
    CustomersExport,

    IntelligenceView,
    IntelligenceViewAll,
    IntelligenceExport,

    /// View compliance status and reports.
    ComplianceView,
    /// Change compliance configuration.
    ///
    /// **Security Impact:** restricted to the admin role.
    ComplianceManage,
    ComplianceExport,

    ReportsView,
    ReportsCreate,
    ReportsExport,
    ReportsSchedule,

    BillingView,
    /// Change plans and payment methods.
    BillingManage,
    BillingViewInvoices,
    BillingDownloadInvoices,

    TeamView,
    TeamInvite,
    TeamRemove,
    /// Assign roles to team members.
    ///
    /// **Security Impact:** can escalate privileges, admin only.
    TeamManageRoles,

    SupportView,
    SupportCreateTicket,
    SupportManage,

    SettingsView,
    SettingsEdit,
    SettingsSecurity,
    SettingsIntegrations,
}

impl Permission {
    /// The whole catalog, grouped by namespace.
    pub const ALL: [Permission; 45] = [
        Permission::DashboardView,
        Permission::DashboardAnalytics,
        Permission::ProjectsView,
        Permission::ProjectsCreate,
        Permission::ProjectsEdit,
        Permission::ProjectsDelete,
        Permission::ApiKeysView,
        Permission::ApiKeysCreate,
        Permission::ApiKeysRevoke,
        Permission::LogsView,
        Permission::LogsExport,
        Permission::WebhooksView,
        Permission::WebhooksCreate,
        Permission::WebhooksEdit,
        Permission::WebhooksDelete,
        Permission::CustomersView,
        Permission::CustomersViewAll,
        Permission::CustomersEdit,
        Permission::CustomersDelete,
        Permission::CustomersExport,
        Permission::IntelligenceView,
        Permission::IntelligenceViewAll,
        Permission::IntelligenceExport,
        Permission::ComplianceView,
        Permission::ComplianceManage,
        Permission::ComplianceExport,
        Permission::ReportsView,
        Permission::ReportsCreate,
        Permission::ReportsExport,
        Permission::ReportsSchedule,
        Permission::BillingView,
        Permission::BillingManage,
        Permission::BillingViewInvoices,
        Permission::BillingDownloadInvoices,
        Permission::TeamView,
        Permission::TeamInvite,
        Permission::TeamRemove,
        Permission::TeamManageRoles,
        Permission::SupportView,
        Permission::SupportCreateTicket,
        Permission::SupportManage,
        Permission::SettingsView,
        Permission::SettingsEdit,
        Permission::SettingsSecurity,
        Permission::SettingsIntegrations,
    ];

    /// Returns the `(namespace, action)` pair of this permission.
    pub fn parts(&self) -> (Namespace, Action) {
        use Action as A;
        use Namespace as N;

        match self {
            Permission::DashboardView => (N::Dashboard, A::View),
            Permission::DashboardAnalytics => (N::Dashboard, A::Analytics),
            Permission::ProjectsView => (N::Projects, A::View),
            Permission::ProjectsCreate => (N::Projects, A::Create),
            Permission::ProjectsEdit => (N::Projects, A::Edit),
            Permission::ProjectsDelete => (N::Projects, A::Delete),
            Permission::ApiKeysView => (N::ApiKeys, A::View),
            Permission::ApiKeysCreate => (N::ApiKeys, A::Create),
            Permission::ApiKeysRevoke => (N::ApiKeys, A::Revoke),
            Permission::LogsView => (N::Logs, A::View),
            Permission::LogsExport => (N::Logs, A::Export),
            Permission::WebhooksView => (N::Webhooks, A::View),
            Permission::WebhooksCreate => (N::Webhooks, A::Create),
            Permission::WebhooksEdit => (N::Webhooks, A::Edit),
            Permission::WebhooksDelete => (N::Webhooks, A::Delete),
            Permission::CustomersView => (N::Customers, A::View),
            Permission::CustomersViewAll => (N::Customers, A::ViewAll),
            Permission::CustomersEdit => (N::Customers, A::Edit),
            Permission::CustomersDelete => (N::Customers, A::Delete),
            Permission::CustomersExport => (N::Customers, A::Export),
            Permission::IntelligenceView => (N::Intelligence, A::View),
            Permission::IntelligenceViewAll => (N::Intelligence, A::ViewAll),
            Permission::IntelligenceExport => (N::Intelligence, A::Export),
            Permission::ComplianceView => (N::Compliance, A::View),
            Permission::ComplianceManage => (N::Compliance, A::Manage),
            Permission::ComplianceExport => (N::Compliance, A::Export),
            Permission::ReportsView => (N::Reports, A::View),
            Permission::ReportsCreate => (N::Reports, A::Create),
            Permission::ReportsExport => (N::Reports, A::Export),
            Permission::ReportsSchedule => (N::Reports, A::Schedule),
            Permission::BillingView => (N::Billing, A::View),
            Permission::BillingManage => (N::Billing, A::Manage),
            Permission::BillingViewInvoices => (N::Billing, A::ViewInvoices),
            Permission::BillingDownloadInvoices => (N::Billing, A::DownloadInvoices),
            Permission::TeamView => (N::Team, A::View),
            Permission::TeamInvite => (N::Team, A::Invite),
            Permission::TeamRemove => (N::Team, A::Remove),
            Permission::TeamManageRoles => (N::Team, A::ManageRoles),
            Permission::SupportView => (N::Support, A::View),
            Permission::SupportCreateTicket => (N::Support, A::CreateTicket),
            Permission::SupportManage => (N::Support, A::Manage),
            Permission::SettingsView => (N::Settings, A::View),
            Permission::SettingsEdit => (N::Settings, A::Edit),
            Permission::SettingsSecurity => (N::Settings, A::Security),
            Permission::SettingsIntegrations => (N::Settings, A::Integrations),
        }
    }

    pub fn namespace(&self) -> Namespace {
        self.parts().0
    }

    pub fn action(&self) -> Action {
        self.parts().1
    }

    /// Looks up the catalog entry for a `(namespace, action)` pair.
    ///
    /// Returns `None` when the pair is not part of the catalog
    /// (e.g. `compliance.create`).
    pub fn from_parts(namespace: Namespace, action: Action) -> Option<Permission> {
        Permission::ALL
            .into_iter()
            .find(|p| p.parts() == (namespace, action))
    }

    /// Returns the dotted identifier, e.g. `"billing.viewInvoices"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::DashboardView => "dashboard.view",
            Permission::DashboardAnalytics => "dashboard.analytics",
            Permission::ProjectsView => "projects.view",
            Permission::ProjectsCreate => "projects.create",
            Permission::ProjectsEdit => "projects.edit",
            Permission::ProjectsDelete => "projects.delete",
            Permission::ApiKeysView => "apikeys.view",
            Permission::ApiKeysCreate => "apikeys.create",
            Permission::ApiKeysRevoke => "apikeys.revoke",
            Permission::LogsView => "logs.view",
            Permission::LogsExport => "logs.export",
            Permission::WebhooksView => "webhooks.view",
            Permission::WebhooksCreate => "webhooks.create",
            Permission::WebhooksEdit => "webhooks.edit",
            Permission::WebhooksDelete => "webhooks.delete",
            Permission::CustomersView => "customers.view",
            Permission::CustomersViewAll => "customers.viewAll",
            Permission::CustomersEdit => "customers.edit",
            Permission::CustomersDelete => "customers.delete",
            Permission::CustomersExport => "customers.export",
            Permission::IntelligenceView => "intelligence.view",
            Permission::IntelligenceViewAll => "intelligence.viewAll",
            Permission::IntelligenceExport => "intelligence.export",
            Permission::ComplianceView => "compliance.view",
            Permission::ComplianceManage => "compliance.manage",
            Permission::ComplianceExport => "compliance.export",
            Permission::ReportsView => "reports.view",
            Permission::ReportsCreate => "reports.create",
            Permission::ReportsExport => "reports.export",
            Permission::ReportsSchedule => "reports.schedule",
            Permission::BillingView => "billing.view",
            Permission::BillingManage => "billing.manage",
            Permission::BillingViewInvoices => "billing.viewInvoices",
            Permission::BillingDownloadInvoices => "billing.downloadInvoices",
            Permission::TeamView => "team.view",
            Permission::TeamInvite => "team.invite",
            Permission::TeamRemove => "team.remove",
            Permission::TeamManageRoles => "team.manageRoles",
            Permission::SupportView => "support.view",
            Permission::SupportCreateTicket => "support.createTicket",
            Permission::SupportManage => "support.manage",
            Permission::SettingsView => "settings.view",
            Permission::SettingsEdit => "settings.edit",
            Permission::SettingsSecurity => "settings.security",
            Permission::SettingsIntegrations => "settings.integrations",
        }
    }

    /// Returns whether this permission is high-risk.
    ///
    /// High-risk permissions destroy data, revoke credentials or change who
    /// can do what. Decisions on them are logged at a higher level.
    pub fn is_high_risk(&self) -> bool {
        matches!(
            self.action(),
            Action::Delete
                | Action::Manage
                | Action::Revoke
                | Action::Remove
                | Action::ManageRoles
                | Action::Security
        )
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseError::UnknownPermission(s.to_string()))
    }
}

impl TryFrom<String> for Permission {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.as_str().to_string()
    }
}

/// Set of permissions granted to a role.
///
/// Ordered so that listings are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    permissions: BTreeSet<Permission>,
}

impl PermissionSet {
    /// Creates a permission set from any collection of permissions.
    pub fn new(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self {
            permissions: permissions.into_iter().collect(),
        }
    }

    /// Creates an empty permission set.
    pub const fn empty() -> Self {
        Self {
            permissions: BTreeSet::new(),
        }
    }

    /// Creates a set holding the whole catalog.
    pub fn full() -> Self {
        Self::new(Permission::ALL)
    }

    /// Returns whether this set contains the given permission.
    pub fn contains(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Adds a permission to the set.
    pub fn grant(&mut self, permission: Permission) {
        self.permissions.insert(permission);
    }

    /// Removes a permission from the set.
    pub fn revoke(&mut self, permission: Permission) {
        self.permissions.remove(&permission);
    }

    /// Returns all permissions in the set, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.permissions.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Returns whether every permission in `other` is also in this set.
    pub fn is_superset(&self, other: &PermissionSet) -> bool {
        self.permissions.is_superset(&other.permissions)
    }

    /// Returns the permissions in this set that `other` lacks.
    pub fn difference(&self, other: &PermissionSet) -> PermissionSet {
        Self::new(self.permissions.difference(&other.permissions).copied())
    }

    /// Returns whether any permission in the set is high-risk.
    pub fn has_high_risk_permission(&self) -> bool {
        self.permissions.iter().any(Permission::is_high_risk)
    }

    /// Returns the dotted identifiers of every permission in the set.
    pub fn to_strings(&self) -> Vec<String> {
        self.iter().map(String::from).collect()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<Permission>> for PermissionSet {
    fn from(permissions: Vec<Permission>) -> Self {
        Self::new(permissions)
    }
}

impl<const N: usize> From<[Permission; N]> for PermissionSet {
    fn from(permissions: [Permission; N]) -> Self {
        Self::new(permissions)
    }
}
