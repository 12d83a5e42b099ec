//! Merges defaults, config files and environment into a [`PortalConfig`]

use crate::{Layer, Paths, PortalConfig};
use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use std::env;
use std::path::{Path, PathBuf};

/// Builder for a layered configuration load.
///
/// Precedence, lowest first: built-in defaults, the user file,
/// `portal.toml`, `portal.local.toml`, then `PORTAL_*` variables such as
/// `PORTAL_ACCESS__UNMAPPED_ROUTES=deny`.
pub struct ConfigLoader {
    paths: Paths,
    env_prefix: String,
    include_user_config: bool,
}

impl ConfigLoader {
    /// Loader rooted at the current directory.
    pub fn new() -> Self {
        Self {
            paths: Paths::new(env::current_dir().unwrap_or_else(|_| PathBuf::from("."))),
            env_prefix: "PORTAL".to_string(),
            include_user_config: true,
        }
    }

    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.paths = Paths::new(dir);
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Ignores the per-user file. Tests use this to stay hermetic.
    pub fn without_user_config(mut self) -> Self {
        self.include_user_config = false;
        self
    }

    /// Files that will take part in [`load`](Self::load), lowest precedence first.
    pub fn layers(&self) -> Vec<(Layer, PathBuf)> {
        self.paths
            .present()
            .into_iter()
            .filter(|(layer, _)| self.include_user_config || *layer != Layer::User)
            .collect()
    }

    pub fn load(self) -> Result<PortalConfig> {
        let mut builder = Config::builder().add_source(Config::try_from(&PortalConfig::default())?);

        for (_, path) in self.layers() {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let mut portal_config: PortalConfig = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        portal_config
            .validate()
            .context("Configuration failed validation")?;
        portal_config.resolve_paths(self.paths.project_dir());

        Ok(portal_config)
    }

    /// Like [`load`](Self::load) but falls back to defaults on any error.
    pub fn load_or_default(self) -> PortalConfig {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_rbac::RouteDefault;
    use std::fs;
    use tempfile::tempdir;

    fn loader(dir: &Path) -> ConfigLoader {
        ConfigLoader::new()
            .with_project_dir(dir)
            .with_env_prefix("PORTAL_TEST_UNSET")
            .without_user_config()
    }

    #[test]
    fn test_load_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = loader(temp_dir.path()).load().expect("Failed to load config");

        assert_eq!(config.project.name, "partner-portal");
        assert_eq!(config.access.unmapped_routes, None);
        assert!(config.access.policy_file.is_none());
    }

    #[test]
    fn test_load_project_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        let config_content = r#"
[project]
name = "acme-portal"

[logging]
level = "debug"

[access]
unmapped_routes = "deny"
audit = false
"#;
        fs::write(project_dir.join("portal.toml"), config_content)
            .expect("Failed to write config");

        let config = loader(project_dir).load().expect("Failed to load config");

        assert_eq!(config.project.name, "acme-portal");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.access.unmapped_routes, Some(RouteDefault::Deny));
        assert!(!config.access.audit);
    }

    #[test]
    fn test_local_overrides() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("portal.toml"),
            r#"
[access]
unmapped_routes = "deny"
"#,
        )
        .expect("Failed to write project config");

        fs::write(
            project_dir.join("portal.local.toml"),
            r#"
[access]
unmapped_routes = "allow"
"#,
        )
        .expect("Failed to write local config");

        let config = loader(project_dir).load().expect("Failed to load config");

        assert_eq!(config.access.unmapped_routes, Some(RouteDefault::Allow));
    }

    #[test]
    fn test_serialized_config_loads_back() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        let mut written = PortalConfig::production();
        written.project.name = "acme-portal".to_string();
        written.access.audit = false;
        let text = toml::to_string_pretty(&written).expect("Failed to serialize config");
        fs::write(project_dir.join("portal.toml"), text).expect("Failed to write config");

        let config = loader(project_dir).load().expect("Failed to load config");

        assert_eq!(config.project.name, "acme-portal");
        assert_eq!(config.logging.level, written.logging.level);
        assert_eq!(config.access.unmapped_routes, Some(RouteDefault::Deny));
        assert!(!config.access.audit);
        assert!(config.access.policy_file.is_none());
    }

    #[test]
    fn test_layers_skip_user_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join("portal.toml"), "").expect("Failed to write config");

        let layers = loader(temp_dir.path()).layers();
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].0, Layer::Project);
    }

    #[test]
    fn test_policy_file_resolved_against_project() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("portal.toml"),
            "[access]\npolicy_file = \"policy/portal-policy.toml\"\n",
        )
        .expect("Failed to write config");

        let config = loader(project_dir).load().expect("Failed to load config");

        assert_eq!(
            config.access.policy_file,
            Some(project_dir.join("policy/portal-policy.toml"))
        );
    }

    #[test]
    fn test_invalid_level_rejected() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(project_dir.join("portal.toml"), "[logging]\nlevel = \"loud\"\n")
            .expect("Failed to write config");

        assert!(loader(project_dir).load().is_err());
        assert_eq!(loader(project_dir).load_or_default().logging.level, "warn");
    }

    #[test]
    fn test_unknown_route_default_rejected() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("portal.toml"),
            "[access]\nunmapped_routes = \"sometimes\"\n",
        )
        .expect("Failed to write config");

        assert!(loader(project_dir).load().is_err());
    }
}
