//! Role → permission registry.
//!
//! Each role's grants are written out literally. No role inherits from
//! another; if one set happens to contain another, that is checked by tests,
//! never assumed by code.

use std::collections::BTreeMap;

use crate::permissions::{Permission, PermissionSet};
use crate::roles::Role;

static NO_PERMISSIONS: PermissionSet = PermissionSet::empty();

/// Immutable mapping from role to granted permissions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleRegistry {
    grants: BTreeMap<Role, PermissionSet>,
}

impl RoleRegistry {
    /// Creates a registry with no roles. Every lookup yields the empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the grants for a role, replacing any previous set.
    pub fn with_role(mut self, role: Role, permissions: impl Into<PermissionSet>) -> Self {
        self.grants.insert(role, permissions.into());
        self
    }

    /// Returns the permissions granted to `role`.
    ///
    /// A role the registry does not list has no permissions.
    pub fn permissions(&self, role: Role) -> &PermissionSet {
        self.grants.get(&role).unwrap_or(&NO_PERMISSIONS)
    }

    /// Returns whether `role` holds `permission`.
    pub fn grants(&self, role: Role, permission: Permission) -> bool {
        self.permissions(role).contains(permission)
    }

    /// Returns the roles this registry lists.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.grants.keys().copied()
    }

    /// The portal's standard grants.
    pub fn standard() -> Self {
        Self::new()
            .with_role(Role::Admin, StandardGrants::admin())
            .with_role(Role::Partner, StandardGrants::partner())
            .with_role(Role::User, StandardGrants::user())
    }
}

/// Standard grant sets for each role.
pub struct StandardGrants;

impl StandardGrants {
    /// The whole catalog.
    pub fn admin() -> PermissionSet {
        PermissionSet::full()
    }

    /// Self-service operational access.
    ///
    /// **Excluded:** `projects.delete`, `compliance.manage`,
    /// `billing.manage`, `team.invite`, `team.remove`, `team.manageRoles`,
    /// `settings.security` and the `viewAll` scopes.
    pub fn partner() -> PermissionSet {
        PermissionSet::from([
            Permission::DashboardView,
            Permission::DashboardAnalytics,
            Permission::ProjectsView,
            Permission::ProjectsCreate,
            Permission::ProjectsEdit,
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
            Permission::CustomersExport,
            Permission::IntelligenceView,
            Permission::IntelligenceExport,
            Permission::ComplianceView,
            Permission::ReportsView,
            Permission::ReportsCreate,
            Permission::ReportsExport,
            Permission::ReportsSchedule,
            Permission::BillingView,
            Permission::BillingViewInvoices,
            Permission::BillingDownloadInvoices,
            Permission::TeamView,
            Permission::SupportView,
            Permission::SupportCreateTicket,
            Permission::SettingsView,
            Permission::SettingsEdit,
            Permission::SettingsIntegrations,
        ])
    }

    /// Read-only access plus support tickets. No team visibility.
    pub fn user() -> PermissionSet {
        PermissionSet::from([
            Permission::DashboardView,
            Permission::ProjectsView,
            Permission::ApiKeysView,
            Permission::LogsView,
            Permission::WebhooksView,
            Permission::CustomersView,
            Permission::IntelligenceView,
            Permission::ComplianceView,
            Permission::ReportsView,
            Permission::BillingView,
            Permission::SupportView,
            Permission::SupportCreateTicket,
            Permission::SettingsView,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::Action;

    #[test]
    fn test_admin_holds_full_catalog() {
        let registry = RoleRegistry::standard();
        for permission in Permission::ALL {
            assert!(registry.grants(Role::Admin, permission), "admin lacks {permission}");
        }
    }

    #[test]
    fn test_admin_superset_by_difference() {
        let registry = RoleRegistry::standard();
        let admin = registry.permissions(Role::Admin);

        assert!(registry.permissions(Role::Partner).difference(admin).is_empty());
        assert!(registry.permissions(Role::User).difference(admin).is_empty());
    }

    #[test]
    fn test_partner_exclusions() {
        let registry = RoleRegistry::standard();

        assert!(registry.grants(Role::Partner, Permission::ProjectsCreate));
        assert!(registry.grants(Role::Partner, Permission::ProjectsEdit));
        assert!(registry.grants(Role::Partner, Permission::WebhooksCreate));
        assert!(registry.grants(Role::Partner, Permission::ApiKeysCreate));
        assert!(registry.grants(Role::Partner, Permission::ReportsCreate));
        assert!(registry.grants(Role::Partner, Permission::ReportsExport));
        assert!(registry.grants(Role::Partner, Permission::BillingView));
        assert!(registry.grants(Role::Partner, Permission::ComplianceView));

        assert!(!registry.grants(Role::Partner, Permission::ProjectsDelete));
        assert!(!registry.grants(Role::Partner, Permission::ComplianceManage));
        assert!(!registry.grants(Role::Partner, Permission::TeamManageRoles));
        assert!(!registry.grants(Role::Partner, Permission::BillingManage));
    }

    #[test]
    fn test_user_is_read_only() {
        let registry = RoleRegistry::standard();

        for permission in registry.permissions(Role::User).iter() {
            assert!(
                permission.action() == Action::View
                    || permission == Permission::SupportCreateTicket,
                "user holds non-view permission {permission}"
            );
        }
        assert!(registry.grants(Role::User, Permission::SupportCreateTicket));
        assert!(!registry.grants(Role::User, Permission::TeamView));
    }

    #[test]
    fn test_unlisted_role_has_no_permissions() {
        let registry = RoleRegistry::new().with_role(Role::Admin, StandardGrants::admin());

        assert!(registry.permissions(Role::User).is_empty());
        assert!(!registry.grants(Role::User, Permission::DashboardView));
        assert_eq!(registry.roles().collect::<Vec<_>>(), vec![Role::Admin]);
    }

    #[test]
    fn test_with_role_replaces_grants() {
        let registry = RoleRegistry::standard()
            .with_role(Role::User, [Permission::SupportView]);

        assert_eq!(registry.permissions(Role::User).len(), 1);
        assert!(!registry.grants(Role::User, Permission::DashboardView));
    }
}
