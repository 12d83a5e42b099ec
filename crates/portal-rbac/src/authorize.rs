//! Authorization predicates.
//!
//! Every check is a pure lookup against an injected [`RoleRegistry`] and
//! [`RouteMap`]. Checks never fail: text that names nothing in the catalog is
//! simply not granted.

use tracing::{debug, info, warn};

use crate::features::FeatureAccess;
use crate::permissions::{Namespace, Permission, PermissionSet};
use crate::registry::RoleRegistry;
use crate::roles::Role;
use crate::routes::{RouteDefault, RouteMap, RouteRequirement};

/// Evaluates permission, route and feature checks for a role.
///
/// Holds read-only policy. Share it behind an `Arc` (or a
/// [`SharedAuthorizer`](crate::shared::SharedAuthorizer) when the policy can
/// be replaced at runtime).
#[derive(Debug, Clone)]
pub struct Authorizer {
    registry: RoleRegistry,
    routes: RouteMap,

    /// Whether to log decisions.
    audit_enabled: bool,
}

impl Authorizer {
    /// Creates an authorizer over the given registry and route map.
    pub fn new(registry: RoleRegistry, routes: RouteMap) -> Self {
        Self {
            registry,
            routes,
            audit_enabled: true,
        }
    }

    /// The standard portal registry and routes.
    pub fn standard() -> Self {
        Self::new(RoleRegistry::standard(), RouteMap::standard())
    }

    /// Disables decision logging (for testing).
    pub fn without_audit(mut self) -> Self {
        self.audit_enabled = false;
        self
    }

    /// Replaces the decision for unlisted routes.
    pub fn with_route_default(mut self, unlisted: RouteDefault) -> Self {
        self.routes = self.routes.with_default(unlisted);
        self
    }

    pub fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    pub fn routes(&self) -> &RouteMap {
        &self.routes
    }

    /// Returns every permission granted to `role`.
    pub fn role_permissions(&self, role: Role) -> &PermissionSet {
        self.registry.permissions(role)
    }

    /// Returns whether `role` holds `permission`.
    pub fn has_permission(&self, role: Role, permission: Permission) -> bool {
        let granted = self.registry.grants(role, permission);
        self.audit_permission(role, permission, granted);
        granted
    }

    /// Like [`has_permission`](Self::has_permission), for a dotted identifier.
    ///
    /// Identifiers outside the catalog are never granted.
    pub fn has_permission_named(&self, role: Role, permission: &str) -> bool {
        match permission.parse::<Permission>() {
            Ok(permission) => self.has_permission(role, permission),
            Err(_) => {
                self.audit_unknown(role, permission);
                false
            }
        }
    }

    /// Returns whether `role` holds at least one of `permissions`.
    ///
    /// An empty slice yields `false`.
    pub fn has_any_permission(&self, role: Role, permissions: &[Permission]) -> bool {
        let granted = permissions.iter().any(|p| self.registry.grants(role, *p));

        if self.audit_enabled {
            debug!(role = %role, permissions = ?permissions, granted, "any-of permission check");
        }

        granted
    }

    /// Returns whether `role` holds every one of `permissions`.
    ///
    /// An empty slice yields `true`.
    pub fn has_all_permissions(&self, role: Role, permissions: &[Permission]) -> bool {
        let granted = permissions.iter().all(|p| self.registry.grants(role, *p));

        if self.audit_enabled {
            debug!(role = %role, permissions = ?permissions, granted, "all-of permission check");
        }

        granted
    }

    /// Any-of check over dotted identifiers; unknown identifiers count as
    /// not granted.
    pub fn has_any_permission_named<S: AsRef<str>>(
        &self,
        role: Role,
        permissions: impl IntoIterator<Item = S>,
    ) -> bool {
        permissions
            .into_iter()
            .any(|p| self.has_permission_named(role, p.as_ref()))
    }

    /// All-of check over dotted identifiers; a single unknown identifier
    /// makes the whole check fail.
    pub fn has_all_permissions_named<S: AsRef<str>>(
        &self,
        role: Role,
        permissions: impl IntoIterator<Item = S>,
    ) -> bool {
        permissions
            .into_iter()
            .all(|p| self.has_permission_named(role, p.as_ref()))
    }

    /// Returns whether `role` may navigate to `path`.
    ///
    /// A listed route needs any of its permissions. An unlisted route follows
    /// the map's [`RouteDefault`].
    pub fn can_access_route(&self, role: Role, path: &str) -> bool {
        let allowed = match self.routes.requirement(path) {
            RouteRequirement::AnyOf(required) => {
                required.iter().any(|p| self.registry.grants(role, p))
            }
            RouteRequirement::Unlisted => self.routes.default_decision() == RouteDefault::Allow,
        };

        if self.audit_enabled {
            if allowed {
                info!(route = %path, role = %role, "Route access granted");
            } else {
                warn!(route = %path, role = %role, "Route access denied");
            }
        }

        allowed
    }

    /// Derives the capability flags of `role` within `namespace`.
    pub fn feature_access(&self, role: Role, namespace: Namespace) -> FeatureAccess {
        let access = FeatureAccess::derive(namespace, |p| self.registry.grants(role, p));

        if self.audit_enabled {
            debug!(role = %role, feature = %namespace, access = ?access, "Feature access derived");
        }

        access
    }

    /// Like [`feature_access`](Self::feature_access), for a namespace name.
    ///
    /// An unknown namespace has no capabilities.
    pub fn feature_access_named(&self, role: Role, namespace: &str) -> FeatureAccess {
        match namespace.parse::<Namespace>() {
            Ok(namespace) => self.feature_access(role, namespace),
            Err(_) => {
                if self.audit_enabled {
                    debug!(role = %role, feature = %namespace, "Unknown feature namespace");
                }
                FeatureAccess::none()
            }
        }
    }

    fn audit_permission(&self, role: Role, permission: Permission, granted: bool) {
        if !self.audit_enabled {
            return;
        }

        if permission.is_high_risk() && granted {
            info!(role = %role, permission = %permission, "High-risk permission granted");
        } else {
            debug!(role = %role, permission = %permission, granted, "Permission check");
        }
    }

    fn audit_unknown(&self, role: Role, permission: &str) {
        if self.audit_enabled {
            debug!(role = %role, permission = %permission, "Permission not in catalog");
        }
    }
}

impl Default for Authorizer {
    fn default() -> Self {
        Self::standard()
    }
}
