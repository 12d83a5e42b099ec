//! Per-feature capability flags.

use serde::{Deserialize, Serialize};

use crate::permissions::{Action, Namespace, Permission};

/// What a role may do within one feature namespace.
///
/// Derived on demand from discrete permission checks; never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureAccess {
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_export: bool,
    pub can_manage: bool,
    pub can_view_all: bool,
}

impl FeatureAccess {
    /// No capabilities at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Builds the flags for `namespace` by asking `granted` about each
    /// synthesized permission.
    ///
    /// A `(namespace, action)` pair outside the catalog is reported as not
    /// granted without consulting `granted`.
    pub fn derive(namespace: Namespace, mut granted: impl FnMut(Permission) -> bool) -> Self {
        let mut check = |action| Permission::from_parts(namespace, action).is_some_and(&mut granted);

        Self {
            can_create: check(Action::Create),
            can_edit: check(Action::Edit),
            can_delete: check(Action::Delete),
            can_export: check(Action::Export),
            can_manage: check(Action::Manage),
            can_view_all: check(Action::ViewAll),
        }
    }

    /// Returns whether any capability is set.
    pub fn any(&self) -> bool {
        self.can_create
            || self.can_edit
            || self.can_delete
            || self.can_export
            || self.can_manage
            || self.can_view_all
    }

    /// Returns `(action, allowed)` pairs in field order.
    pub fn entries(&self) -> [(Action, bool); 6] {
        [
            (Action::Create, self.can_create),
            (Action::Edit, self.can_edit),
            (Action::Delete, self.can_delete),
            (Action::Export, self.can_export),
            (Action::Manage, self.can_manage),
            (Action::ViewAll, self.can_view_all),
        ]
    }
}
