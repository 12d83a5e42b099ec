//! Where configuration layers live on disk

use crate::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// File name of the git-tracked project configuration.
pub const PROJECT_FILE: &str = "portal.toml";

/// File name of the untracked per-checkout overrides.
pub const LOCAL_FILE: &str = "portal.local.toml";

/// One file-backed configuration layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// `~/.config/portal/config.toml` (platform equivalent elsewhere).
    User,
    /// `portal.toml` in the project directory.
    Project,
    /// `portal.local.toml` in the project directory.
    Local,
}

impl Layer {
    /// Layers from lowest to highest precedence.
    pub const ORDER: [Layer; 3] = [Layer::User, Layer::Project, Layer::Local];

    pub fn label(self) -> &'static str {
        match self {
            Layer::User => "user",
            Layer::Project => "project",
            Layer::Local => "local",
        }
    }
}

/// Resolves configuration file locations for one project directory.
#[derive(Debug, Clone)]
pub struct Paths {
    project_dir: PathBuf,
}

impl Paths {
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            project_dir: project_dir.as_ref().to_path_buf(),
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Per-user configuration directory, via XDG on Linux.
    pub fn user_config_dir() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("com", "Portal", "portal")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::NoHomeDirectory)
    }

    /// Location of `layer`; `None` only for the user layer without a home.
    pub fn file(&self, layer: Layer) -> Option<PathBuf> {
        match layer {
            Layer::User => Self::user_config_dir()
                .ok()
                .map(|dir| dir.join("config.toml")),
            Layer::Project => Some(self.project_dir.join(PROJECT_FILE)),
            Layer::Local => Some(self.project_dir.join(LOCAL_FILE)),
        }
    }

    /// Layers whose file exists, lowest precedence first.
    pub fn present(&self) -> Vec<(Layer, PathBuf)> {
        Layer::ORDER
            .into_iter()
            .filter_map(|layer| self.file(layer).map(|path| (layer, path)))
            .filter(|(_, path)| path.is_file())
            .collect()
    }

    /// A directory counts as a portal project once it has `portal.toml`.
    pub fn is_initialized(&self) -> bool {
        self.project_dir.join(PROJECT_FILE).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_user_file_under_portal_dir() {
        if let Ok(dir) = Paths::user_config_dir() {
            assert!(dir.to_string_lossy().contains("portal"));
        }
    }

    #[test]
    fn test_project_layers() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let paths = Paths::new(temp_dir.path());

        assert_eq!(
            paths.file(Layer::Project),
            Some(temp_dir.path().join("portal.toml"))
        );
        assert_eq!(
            paths.file(Layer::Local),
            Some(temp_dir.path().join("portal.local.toml"))
        );
        assert!(!paths.is_initialized());
        assert!(paths.present().iter().all(|(layer, _)| *layer == Layer::User));

        std::fs::write(temp_dir.path().join(LOCAL_FILE), "").unwrap();
        std::fs::write(temp_dir.path().join(PROJECT_FILE), "").unwrap();
        assert!(paths.is_initialized());

        let layers: Vec<Layer> = paths
            .present()
            .into_iter()
            .map(|(layer, _)| layer)
            .filter(|layer| *layer != Layer::User)
            .collect();
        assert_eq!(layers, vec![Layer::Project, Layer::Local]);
    }
}
