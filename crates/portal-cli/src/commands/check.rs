//! Permission check command.

use anyhow::Result;
use clap::ValueEnum;
use portal_rbac::{AccessContext, Authorizer, Permission, Role};

use crate::style::{print_decision, print_warn};

/// How multiple permissions combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Granted if any permission is held.
    Any,
    /// Granted if every permission is held.
    All,
}

/// Checks `permissions` for `role` and prints the decision.
pub fn run(
    authorizer: &Authorizer,
    role: Option<Role>,
    permissions: &[String],
    mode: Mode,
) -> Result<()> {
    let ctx = AccessContext::new(authorizer, role);

    for unknown in permissions.iter().filter(|p| p.parse::<Permission>().is_err()) {
        print_warn(&format!("{unknown} is not in the permission catalog"));
    }
    if role.is_none() {
        print_warn("No role given; checking as an unauthenticated session");
    }

    let granted = match mode {
        Mode::Any => ctx.has_any_permission_named(permissions),
        Mode::All => ctx.has_all_permissions_named(permissions),
    };

    print_decision(granted, "granted", "denied");
    Ok(())
}
