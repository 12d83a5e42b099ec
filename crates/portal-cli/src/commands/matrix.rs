//! Role × permission matrix command.

use anyhow::Result;
use comfy_table::Cell;
use portal_rbac::{Authorizer, Permission, Role};

use crate::style::{mark, print_grid_table};

/// Prints which role holds which permission.
pub fn run(authorizer: &Authorizer) -> Result<()> {
    let mut columns = vec!["Permission"];
    columns.extend(Role::ALL.iter().map(|role| role.as_str()));

    let rows = Permission::ALL
        .iter()
        .map(|permission| {
            let mut row = vec![Cell::new(permission)];
            row.extend(Role::ALL.iter().map(|role| {
                mark(authorizer.role_permissions(*role).contains(*permission), "✓", "")
            }));
            row
        })
        .collect();

    print_grid_table(&columns, rows);
    Ok(())
}
