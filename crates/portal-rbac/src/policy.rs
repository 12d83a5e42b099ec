//! Policy documents.
//!
//! A TOML document can stand in for the standard grants and routes:
//!
//! ```toml
//! [roles]
//! admin = ["projects.view", "projects.delete"]
//! user = ["projects.view"]
//!
//! [routes]
//! "/projects" = ["projects.view"]
//! ```
//!
//! Every string is checked against the catalog when the document is loaded.
//! Unlike the predicates, loading fails loudly: a typo in a policy file must
//! not quietly turn into a denied permission.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use crate::authorize::Authorizer;
use crate::error::{PolicyError, Result};
use crate::permissions::{Permission, PermissionSet};
use crate::registry::RoleRegistry;
use crate::roles::Role;
use crate::routes::{RouteDefault, RouteMap};

/// Untyped form of a policy, as written in a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyDocument {
    /// Decision for routes not listed in `routes`.
    pub unmapped_routes: RouteDefault,

    /// Role name → permission identifiers.
    pub roles: BTreeMap<String, Vec<String>>,

    /// Route path → permission identifiers (any-of).
    pub routes: BTreeMap<String, Vec<String>>,
}

impl PolicyDocument {
    /// Parses a document from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| PolicyError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Describes an authorizer's registry and routes as a document.
    pub fn from_authorizer(authorizer: &Authorizer) -> Self {
        let roles = authorizer
            .registry()
            .roles()
            .map(|role| {
                (
                    role.to_string(),
                    authorizer.role_permissions(role).to_strings(),
                )
            })
            .collect();
        let routes = authorizer
            .routes()
            .iter()
            .map(|(path, required)| (path.to_string(), required.to_strings()))
            .collect();

        Self {
            unmapped_routes: authorizer.routes().default_decision(),
            roles,
            routes,
        }
    }

    /// Validates the document and builds the typed registry and routes.
    pub fn into_authorizer(self) -> Result<Authorizer> {
        let mut registry = RoleRegistry::new();
        for (name, permissions) in &self.roles {
            let role: Role = name.parse().map_err(|_| PolicyError::UnknownRole {
                role: name.clone(),
            })?;
            let set = parse_permissions(permissions, || format!("role {name}"))?;
            registry = registry.with_role(role, set);
        }

        let mut routes = RouteMap::new().with_default(self.unmapped_routes);
        for (path, permissions) in &self.routes {
            if !path.starts_with('/') {
                return Err(PolicyError::InvalidRoute { route: path.clone() });
            }
            let set = parse_permissions(permissions, || format!("route {path}"))?;
            routes = routes.with_route(path.clone(), set);
        }

        info!(
            roles = self.roles.len(),
            routes = self.routes.len(),
            unmapped_routes = ?self.unmapped_routes,
            "Policy document loaded"
        );

        Ok(Authorizer::new(registry, routes))
    }
}

fn parse_permissions(
    identifiers: &[String],
    context: impl Fn() -> String,
) -> Result<PermissionSet> {
    identifiers
        .iter()
        .map(|id| {
            id.parse::<Permission>()
                .map_err(|_| PolicyError::UnknownPermission {
                    context: context(),
                    permission: id.clone(),
                })
        })
        .collect()
}

impl TryFrom<PolicyDocument> for Authorizer {
    type Error = PolicyError;

    fn try_from(document: PolicyDocument) -> Result<Self> {
        document.into_authorizer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_minimal_document() {
        let doc = PolicyDocument::from_toml(
            r#"
[roles]
admin = ["projects.view", "projects.delete"]
user = ["projects.view"]

[routes]
"/projects" = ["projects.view"]
"/danger" = ["projects.delete"]
"#,
        )
        .unwrap();
        let auth = doc.into_authorizer().unwrap().without_audit();

        assert!(auth.has_permission(Role::Admin, Permission::ProjectsDelete));
        assert!(!auth.has_permission(Role::User, Permission::ProjectsDelete));
        assert!(auth.role_permissions(Role::Partner).is_empty());
        assert!(auth.can_access_route(Role::User, "/projects"));
        assert!(!auth.can_access_route(Role::User, "/danger"));
        assert!(auth.can_access_route(Role::User, "/elsewhere"));
    }

    #[test]
    fn test_unmapped_routes_deny() {
        let doc = PolicyDocument::from_toml("unmapped_routes = \"deny\"").unwrap();
        let auth = doc.into_authorizer().unwrap().without_audit();

        assert!(!auth.can_access_route(Role::Admin, "/anything"));
    }

    #[test]
    fn test_unknown_permission_rejected() {
        let doc = PolicyDocument::from_toml(
            r#"
[roles]
partner = ["projects.view", "compliance.create"]
"#,
        )
        .unwrap();

        match doc.into_authorizer() {
            Err(PolicyError::UnknownPermission {
                context,
                permission,
            }) => {
                assert_eq!(context, "role partner");
                assert_eq!(permission, "compliance.create");
            }
            other => panic!("Expected UnknownPermission, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        let doc = PolicyDocument::from_toml("[roles]\nauditor = []\n").unwrap();
        assert!(matches!(
            doc.into_authorizer(),
            Err(PolicyError::UnknownRole { role }) if role == "auditor"
        ));
    }

    #[test]
    fn test_relative_route_rejected() {
        let doc = PolicyDocument::from_toml("[routes]\n\"team\" = [\"team.view\"]\n").unwrap();
        assert!(matches!(
            doc.into_authorizer(),
            Err(PolicyError::InvalidRoute { .. })
        ));
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        assert!(matches!(
            PolicyDocument::from_toml("[grants]\nadmin = []\n"),
            Err(PolicyError::Syntax(_))
        ));
    }

    #[test]
    fn test_standard_policy_survives_document_form() {
        let standard = Authorizer::standard();
        let doc = PolicyDocument::from_authorizer(&standard);
        let text = toml::to_string(&doc).unwrap();

        let rebuilt = PolicyDocument::from_toml(&text)
            .unwrap()
            .into_authorizer()
            .unwrap();

        assert_eq!(rebuilt.registry(), standard.registry());
        assert_eq!(rebuilt.routes(), standard.routes());
    }

    #[test]
    fn test_closed_policy_survives_toml_text() {
        let closed = PolicyDocument::from_toml(
            "unmapped_routes = \"deny\"\n\n[roles]\nadmin = [\"team.remove\"]\n",
        )
        .unwrap()
        .into_authorizer()
        .unwrap();

        let text = toml::to_string(&PolicyDocument::from_authorizer(&closed)).unwrap();
        let rebuilt = PolicyDocument::from_toml(&text)
            .unwrap()
            .into_authorizer()
            .unwrap()
            .without_audit();

        assert_eq!(rebuilt.routes().default_decision(), RouteDefault::Deny);
        assert!(!rebuilt.can_access_route(Role::Admin, "/anything"));
        assert!(rebuilt.has_permission(Role::Admin, Permission::TeamRemove));
    }

    #[test]
    fn test_from_path() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("policy.toml");
        fs::write(&path, "[roles]\nuser = [\"support.createTicket\"]\n")
            .expect("Failed to write policy");

        let auth = PolicyDocument::from_path(&path)
            .unwrap()
            .into_authorizer()
            .unwrap();
        assert!(auth.has_permission(Role::User, Permission::SupportCreateTicket));

        let missing = PolicyDocument::from_path(dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(PolicyError::ReadError { .. })));
    }
}
