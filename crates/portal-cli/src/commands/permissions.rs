//! Role permission listing command.

use anyhow::Result;
use portal_rbac::{Authorizer, Role};

use super::OutputFormat;
use crate::style::{colors::Toned, print_header};

/// Lists every permission granted to `role`.
pub fn run(authorizer: &Authorizer, role: Role, format: OutputFormat) -> Result<()> {
    let permissions = authorizer.role_permissions(role);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(permissions)?);
        }
        OutputFormat::Text => {
            print_header(&format!("{role} ({} permissions)", permissions.len()));
            for permission in permissions.iter() {
                if permission.is_high_risk() {
                    println!("  {}", permission.caution());
                } else {
                    println!("  {permission}");
                }
            }
        }
    }

    Ok(())
}
