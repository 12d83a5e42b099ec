//! Policy document commands.

use anyhow::{Context, Result};
use clap::ValueEnum;
use portal_rbac::{Authorizer, PolicyDocument, Role};
use std::path::Path;

use crate::style::{print_labeled, print_success};

/// Serialization format for `policy show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentFormat {
    Toml,
    Json,
}

/// Prints the active policy as a document that `access.policy_file` accepts.
pub fn show(authorizer: &Authorizer, format: DocumentFormat) -> Result<()> {
    let document = PolicyDocument::from_authorizer(authorizer);

    match format {
        DocumentFormat::Toml => {
            let text = toml::to_string_pretty(&document).context("Failed to render policy")?;
            print!("{text}");
        }
        DocumentFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
    }

    Ok(())
}

/// Validates a policy document without activating it.
pub fn check(path: &Path) -> Result<()> {
    let authorizer = PolicyDocument::from_path(path)
        .and_then(PolicyDocument::into_authorizer)
        .with_context(|| format!("Invalid policy document {}", path.display()))?;

    print_success(&format!("{} is valid", path.display()));
    for role in Role::ALL {
        print_labeled(
            role.as_str(),
            &format!("{} permissions", authorizer.role_permissions(role).len()),
        );
    }
    print_labeled("routes", &authorizer.routes().len().to_string());

    Ok(())
}
