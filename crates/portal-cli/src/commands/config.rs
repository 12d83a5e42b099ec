//! Configuration management commands.

use anyhow::Result;
use clap::ValueEnum;
use portal_config::{ConfigLoader, PortalConfig};
use portal_rbac::RouteDefault;
use std::path::Path;

use crate::style::{print_hint, print_info_table, print_labeled};

/// Serialization format for `config show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Text,
    Json,
    Toml,
}

/// Show current configuration.
pub fn show(project: &Path, config: &PortalConfig, format: ConfigFormat) -> Result<()> {
    match format {
        ConfigFormat::Json => {
            let json = serde_json::to_string_pretty(config)?;
            println!("{json}");
        }
        ConfigFormat::Toml => {
            let toml_str = toml::to_string_pretty(config)?;
            println!("{toml_str}");
        }
        ConfigFormat::Text => {
            let policy_file = config
                .access
                .policy_file
                .as_ref()
                .map_or_else(|| "(standard policy)".to_string(), |p| p.display().to_string());
            let unmapped = config
                .access
                .unmapped_routes
                .map_or("(policy default)", RouteDefault::as_str);
            let audit = config.access.audit.to_string();

            print_info_table(&[
                ("Project", config.project.name.as_str()),
                ("Log level", config.logging.level.as_str()),
                ("Policy file", policy_file.as_str()),
                ("Unmapped routes", unmapped),
                ("Audit", audit.as_str()),
            ]);

            let layers = ConfigLoader::new().with_project_dir(project).layers();
            if layers.is_empty() {
                print_hint(&format!(
                    "no config files found for {}; showing defaults and environment overrides",
                    project.display()
                ));
            }
            for (layer, path) in layers {
                print_labeled(layer.label(), &path.display().to_string());
            }
        }
    }

    Ok(())
}
