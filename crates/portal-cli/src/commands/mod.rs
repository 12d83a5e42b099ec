//! CLI command implementations.

pub mod check;
pub mod config;
pub mod features;
pub mod matrix;
pub mod permissions;
pub mod policy;
pub mod route;
pub mod version;

use anyhow::{Context, Result};
use clap::ValueEnum;
use portal_config::PortalConfig;
use portal_rbac::{Authorizer, PolicyDocument};
use tracing::info;

/// Output format for commands with structured results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Builds the authorizer described by the configuration.
///
/// Uses the policy document named by `access.policy_file` when set, and the
/// standard grants and routes otherwise. An `access.unmapped_routes` set in
/// the configuration, `allow` included, replaces the default the document
/// carries; left unset, the document's default stands.
pub fn load_authorizer(config: &PortalConfig) -> Result<Authorizer> {
    let authorizer = match &config.access.policy_file {
        Some(path) => {
            info!(path = %path.display(), "Loading policy document");
            PolicyDocument::from_path(path)
                .and_then(PolicyDocument::into_authorizer)
                .with_context(|| format!("Failed to load policy from {}", path.display()))?
        }
        None => Authorizer::standard(),
    };

    let authorizer = match config.access.unmapped_routes {
        Some(unlisted) => authorizer.with_route_default(unlisted),
        None => authorizer,
    };

    Ok(if config.access.audit {
        authorizer
    } else {
        authorizer.without_audit()
    })
}
