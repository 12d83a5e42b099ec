//! Route → required-permission map.
//!
//! Route gating is advisory navigation control for the portal UI. A route
//! needs ANY one of its listed permissions. Routes the map does not list fall
//! back to a [`RouteDefault`], which is `Allow` unless configured otherwise.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::permissions::{Permission, PermissionSet};

/// Decision for routes the map does not list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteDefault {
    /// Unlisted routes are open to every authenticated role.
    #[default]
    Allow,

    /// Unlisted routes are closed.
    Deny,
}

impl RouteDefault {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
        }
    }
}

/// Requirement of a single route, as resolved by [`RouteMap::requirement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRequirement<'a> {
    /// The route is listed with at least one permission.
    AnyOf(&'a PermissionSet),

    /// The route is not listed, or lists no permissions.
    Unlisted,
}

/// Immutable mapping from route path to required permissions.
///
/// Paths match exactly; `/projects/42` is a different route from `/projects`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMap {
    routes: BTreeMap<String, PermissionSet>,
    unlisted: RouteDefault,
}

impl RouteMap {
    /// Creates an empty map. Every route is unlisted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a route requiring any of `permissions`.
    pub fn with_route(
        mut self,
        path: impl Into<String>,
        permissions: impl Into<PermissionSet>,
    ) -> Self {
        self.routes.insert(path.into(), permissions.into());
        self
    }

    /// Sets the decision for unlisted routes.
    pub fn with_default(mut self, unlisted: RouteDefault) -> Self {
        self.unlisted = unlisted;
        self
    }

    /// Returns the decision for unlisted routes.
    pub fn default_decision(&self) -> RouteDefault {
        self.unlisted
    }

    /// Resolves what `path` requires.
    pub fn requirement(&self, path: &str) -> RouteRequirement<'_> {
        match self.routes.get(path) {
            Some(required) if !required.is_empty() => RouteRequirement::AnyOf(required),
            _ => RouteRequirement::Unlisted,
        }
    }

    /// Returns the listed routes and their requirements, sorted by path.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PermissionSet)> {
        self.routes.iter().map(|(path, set)| (path.as_str(), set))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The portal's standard navigation routes.
    pub fn standard() -> Self {
        Self::new()
            .with_route("/dashboard", [Permission::DashboardView])
            .with_route("/projects", [Permission::ProjectsView])
            .with_route("/api-keys", [Permission::ApiKeysView])
            .with_route("/logs", [Permission::LogsView])
            .with_route("/webhooks", [Permission::WebhooksView])
            .with_route("/customers", [Permission::CustomersView])
            .with_route("/intelligence", [Permission::IntelligenceView])
            .with_route("/compliance", [Permission::ComplianceView])
            .with_route("/reports", [Permission::ReportsView])
            .with_route(
                "/billing",
                [Permission::BillingView, Permission::BillingManage],
            )
            .with_route("/team", [Permission::TeamView])
            .with_route("/support", [Permission::SupportView])
            .with_route("/settings", [Permission::SettingsView])
    }
}
