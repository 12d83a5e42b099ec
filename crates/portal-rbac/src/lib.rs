//! # portal-rbac: Role-Based Access Control
//!
//! Authorization core for the partner portal:
//! - **Permission catalog** (closed set of `<namespace>.<action>` identifiers)
//! - **Role registry** (3 roles: Admin, Partner, User)
//! - **Predicates** (has / any-of / all-of checks)
//! - **Route guard** (route → required permissions)
//! - **Feature access** (six capability flags per feature namespace)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  View layer (page, button, menu item)       │
//! └─────────────────┬───────────────────────────┘
//!                   │ SessionAccessor::current_role()
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │  AccessContext (authorizer + role)          │
//! └─────────────────┬───────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │  Authorizer                                 │
//! │  ├─ RoleRegistry   (role → permissions)     │
//! │  └─ RouteMap       (route → any-of)         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Roles
//!
//! | Role    | View | Create/Edit | Delete projects | Manage compliance | Manage team roles | Tickets |
//! |---------|------|-------------|-----------------|-------------------|-------------------|---------|
//! | User    | ✓ (no team) | ✗    | ✗               | ✗                 | ✗                 | ✓       |
//! | Partner | ✓    | ✓           | ✗               | ✗                 | ✗                 | ✓       |
//! | Admin   | ✓    | ✓           | ✓               | ✓                 | ✓                 | ✓       |
//!
//! ## Examples
//!
//! ### Permission checks
//!
//! ```
//! use portal_rbac::{Authorizer, Permission, Role};
//!
//! let auth = Authorizer::standard();
//!
//! assert!(auth.has_permission(Role::Partner, Permission::ProjectsCreate));
//! assert!(!auth.has_permission(Role::Partner, Permission::ComplianceManage));
//!
//! // Identifiers outside the catalog are never granted.
//! assert!(!auth.has_permission_named(Role::Admin, "compliance.create"));
//!
//! // Vacuous truth: all-of over nothing holds, any-of over nothing does not.
//! assert!(auth.has_all_permissions(Role::User, &[]));
//! assert!(!auth.has_any_permission(Role::User, &[]));
//! ```
//!
//! ### Routes and features
//!
//! ```
//! use portal_rbac::{Authorizer, Namespace, Role};
//!
//! let auth = Authorizer::standard();
//!
//! assert!(auth.can_access_route(Role::User, "/billing"));
//! assert!(!auth.can_access_route(Role::User, "/team"));
//! assert!(auth.can_access_route(Role::User, "/not-listed"));
//!
//! let access = auth.feature_access(Role::Admin, Namespace::Customers);
//! assert!(!access.can_create);
//! assert!(access.can_view_all);
//! ```
//!
//! ### Session binding
//!
//! ```
//! use portal_rbac::{Authorizer, Permission, Role};
//!
//! let auth = Authorizer::standard();
//!
//! let signed_in = auth.for_session(&Some(Role::User));
//! assert!(signed_in.has_permission(Permission::SupportCreateTicket));
//!
//! let anonymous = auth.for_session(&None::<Role>);
//! assert!(!anonymous.can_access_route("/dashboard"));
//! ```
//!
//! ## Route defaults
//!
//! Routes missing from the map are open to every authenticated role, while
//! permissions missing from a role are denied. The route map only needs to
//! list what it restricts. Set [`RouteDefault::Deny`] to close unlisted
//! routes instead.

pub mod authorize;
pub mod error;
pub mod features;
pub mod permissions;
pub mod policy;
pub mod registry;
pub mod roles;
pub mod routes;
pub mod session;
pub mod shared;

// Re-export commonly used types
pub use authorize::Authorizer;
pub use error::{ParseError, PolicyError};
pub use features::FeatureAccess;
pub use permissions::{Action, Namespace, Permission, PermissionSet};
pub use policy::PolicyDocument;
pub use registry::{RoleRegistry, StandardGrants};
pub use roles::Role;
pub use routes::{RouteDefault, RouteMap, RouteRequirement};
pub use session::{AccessContext, SessionAccessor};
pub use shared::SharedAuthorizer;

// Kani proofs for bounded model checking
#[cfg(kani)]
mod kani_proofs;
