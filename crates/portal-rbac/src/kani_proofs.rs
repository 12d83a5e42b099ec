//! Kani bounded model checking proofs for RBAC correctness.
//!
//! - Quantifier edges: any-of over nothing is false, all-of over nothing is true
//! - Catalog closure: synthesized pairs outside the catalog are never granted
//! - Admin coverage: the admin grants contain every other role's grants

use crate::{
    authorize::Authorizer,
    features::FeatureAccess,
    permissions::{Action, Namespace, Permission},
    roles::Role,
};

fn any_role() -> Role {
    match kani::any::<u8>() % 3 {
        0 => Role::Admin,
        1 => Role::Partner,
        _ => Role::User,
    }
}

fn any_permission() -> Permission {
    let index: usize = kani::any();
    kani::assume(index < Permission::ALL.len());
    Permission::ALL[index]
}

//=============================================================================
// Quantifier edges
//=============================================================================

/// Empty any-of denies and empty all-of grants, for every role.
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(4)]
fn verify_empty_quantifiers() {
    let auth = Authorizer::standard().without_audit();
    let role = any_role();

    assert!(!auth.has_any_permission(role, &[]));
    assert!(auth.has_all_permissions(role, &[]));
}

//=============================================================================
// Catalog closure
//=============================================================================

/// A capability slot whose pair is not in the catalog is always false.
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(50)]
fn verify_synthesized_pairs_outside_catalog_denied() {
    let auth = Authorizer::standard().without_audit();
    let role = any_role();

    let access = auth.feature_access(role, Namespace::Compliance);
    assert!(Permission::from_parts(Namespace::Compliance, Action::Create).is_none());
    assert!(!access.can_create);
    assert!(!access.can_edit);
    assert!(!access.can_delete);
    assert!(!access.can_view_all);

    let none = FeatureAccess::none();
    assert!(!none.any());
}

//=============================================================================
// Admin coverage
//=============================================================================

/// Any permission held by any role is also held by admin.
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(50)]
fn verify_admin_covers_other_roles() {
    let auth = Authorizer::standard().without_audit();
    let role = any_role();
    let permission = any_permission();

    if auth.has_permission(role, permission) {
        assert!(auth.has_permission(Role::Admin, permission));
    }
}
