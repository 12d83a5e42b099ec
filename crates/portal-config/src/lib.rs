//! Configuration management for the partner portal
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence, applied by the caller)
//! 2. Environment variables (PORTAL_* prefix, `__` between sections and keys)
//! 3. portal.local.toml (gitignored, local overrides)
//! 4. portal.toml (git-tracked, project config)
//! 5. ~/.config/portal/config.toml (user defaults)
//! 6. Built-in defaults (lowest precedence)

use anyhow::Result;
use portal_rbac::RouteDefault;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::{LOCAL_FILE, Layer, PROJECT_FILE, Paths};

/// Log levels accepted by `[logging] level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main portal configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub project: ProjectConfig,
    pub logging: LoggingConfig,
    pub access: AccessConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "partner-portal".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level; `RUST_LOG` takes precedence when set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Policy document replacing the standard grants and routes.
    pub policy_file: Option<PathBuf>,

    /// Decision for routes the route map does not list. `None` keeps the
    /// policy's own default, which is `allow` for the standard policy.
    pub unmapped_routes: Option<RouteDefault>,

    /// Whether authorization decisions are logged.
    pub audit: bool,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            policy_file: None,
            unmapped_routes: None,
            audit: true,
        }
    }
}

impl PortalConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Create a development configuration
    pub fn development() -> Self {
        Self {
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
            ..Default::default()
        }
    }

    /// Create a production configuration
    pub fn production() -> Self {
        Self {
            access: AccessConfig {
                unmapped_routes: Some(RouteDefault::Deny),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Resolve relative paths to absolute
    pub fn resolve_paths(&mut self, base_dir: impl AsRef<Path>) {
        let base = base_dir.as_ref();

        if let Some(policy_file) = self.access.policy_file.as_mut() {
            if policy_file.is_relative() {
                *policy_file = base.join(&*policy_file);
            }
        }
    }

    /// Check values the type system cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::UnknownLogLevel {
                found: self.logging.level.clone(),
                expected: LOG_LEVELS.join(", "),
            });
        }

        if self.project.name.trim().is_empty() {
            return Err(ConfigError::EmptyProjectName);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PortalConfig::default();
        assert_eq!(config.project.name, "partner-portal");
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.access.unmapped_routes, None);
        assert!(config.access.policy_file.is_none());
        assert!(config.access.audit);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_development_config() {
        let config = PortalConfig::development();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.access.unmapped_routes, None);
    }

    #[test]
    fn test_production_config() {
        let config = PortalConfig::production();
        assert_eq!(config.access.unmapped_routes, Some(RouteDefault::Deny));
        assert!(config.access.audit);
    }

    #[test]
    fn test_path_resolution() {
        let mut config = PortalConfig::default();
        config.access.policy_file = Some(PathBuf::from("policy.toml"));
        config.resolve_paths("/home/user/project");

        assert_eq!(
            config.access.policy_file,
            Some(PathBuf::from("/home/user/project/policy.toml"))
        );
    }

    #[test]
    fn test_absolute_path_untouched() {
        let mut config = PortalConfig::default();
        config.access.policy_file = Some(PathBuf::from("/etc/portal/policy.toml"));
        config.resolve_paths("/home/user/project");

        assert_eq!(
            config.access.policy_file,
            Some(PathBuf::from("/etc/portal/policy.toml"))
        );
    }

    #[test]
    fn test_validate_rejects_bad_level() {
        let mut config = PortalConfig::default();
        config.logging.level = "loud".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut config = PortalConfig::default();
        config.project.name = "  ".to_string();

        assert_eq!(config.validate(), Err(ConfigError::EmptyProjectName));
    }
}
