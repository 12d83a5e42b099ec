//! Binding checks to the current session.
//!
//! The session layer owns authentication; this module only asks it for the
//! current role. With no role every check denies.

use crate::authorize::Authorizer;
use crate::features::FeatureAccess;
use crate::permissions::{Namespace, Permission, PermissionSet};
use crate::roles::Role;

static NO_PERMISSIONS: PermissionSet = PermissionSet::empty();

/// Source of the authenticated role.
pub trait SessionAccessor {
    /// Returns the current role, or `None` when nobody is signed in.
    fn current_role(&self) -> Option<Role>;
}

impl SessionAccessor for Option<Role> {
    fn current_role(&self) -> Option<Role> {
        *self
    }
}

impl SessionAccessor for Role {
    fn current_role(&self) -> Option<Role> {
        Some(*self)
    }
}

impl<T: SessionAccessor + ?Sized> SessionAccessor for &T {
    fn current_role(&self) -> Option<Role> {
        (**self).current_role()
    }
}

/// An [`Authorizer`] bound to one session's role.
///
/// Construct one per render or request; it borrows the authorizer and holds
/// the role captured at construction.
#[derive(Debug, Clone, Copy)]
pub struct AccessContext<'a> {
    authorizer: &'a Authorizer,
    role: Option<Role>,
}

impl<'a> AccessContext<'a> {
    /// Binds `authorizer` to an explicit role.
    pub fn new(authorizer: &'a Authorizer, role: Option<Role>) -> Self {
        Self { authorizer, role }
    }

    /// Binds `authorizer` to whatever role `session` reports right now.
    pub fn from_session(authorizer: &'a Authorizer, session: &impl SessionAccessor) -> Self {
        Self::new(authorizer, session.current_role())
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    /// Permissions of the bound role; empty when unauthenticated.
    pub fn permissions(&self) -> &'a PermissionSet {
        match self.role {
            Some(role) => self.authorizer.role_permissions(role),
            None => &NO_PERMISSIONS,
        }
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.role
            .is_some_and(|role| self.authorizer.has_permission(role, permission))
    }

    pub fn has_permission_named(&self, permission: &str) -> bool {
        self.role
            .is_some_and(|role| self.authorizer.has_permission_named(role, permission))
    }

    pub fn has_any_permission(&self, permissions: &[Permission]) -> bool {
        self.role
            .is_some_and(|role| self.authorizer.has_any_permission(role, permissions))
    }

    /// All-of check. Unauthenticated sessions are denied even for an empty
    /// slice.
    pub fn has_all_permissions(&self, permissions: &[Permission]) -> bool {
        self.role
            .is_some_and(|role| self.authorizer.has_all_permissions(role, permissions))
    }

    pub fn has_any_permission_named<S: AsRef<str>>(
        &self,
        permissions: impl IntoIterator<Item = S>,
    ) -> bool {
        self.role
            .is_some_and(|role| self.authorizer.has_any_permission_named(role, permissions))
    }

    pub fn has_all_permissions_named<S: AsRef<str>>(
        &self,
        permissions: impl IntoIterator<Item = S>,
    ) -> bool {
        self.role
            .is_some_and(|role| self.authorizer.has_all_permissions_named(role, permissions))
    }

    /// Route check. Unauthenticated sessions are denied every route,
    /// including unlisted ones.
    pub fn can_access_route(&self, path: &str) -> bool {
        self.role
            .is_some_and(|role| self.authorizer.can_access_route(role, path))
    }

    pub fn feature_access(&self, namespace: Namespace) -> FeatureAccess {
        self.role.map_or_else(FeatureAccess::none, |role| {
            self.authorizer.feature_access(role, namespace)
        })
    }

    pub fn feature_access_named(&self, namespace: &str) -> FeatureAccess {
        self.role.map_or_else(FeatureAccess::none, |role| {
            self.authorizer.feature_access_named(role, namespace)
        })
    }
}

impl Authorizer {
    /// Binds this authorizer to the role `session` currently reports.
    pub fn for_session(&self, session: &impl SessionAccessor) -> AccessContext<'_> {
        AccessContext::from_session(self, session)
    }
}
