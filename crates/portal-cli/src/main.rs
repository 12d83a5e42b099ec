//! Portal access control CLI.
//!
//! Evaluates the partner portal's role-based access policy from a terminal.
//!
//! # Quick Start
//!
//! ```bash
//! # Can a partner create projects?
//! portal check --role partner projects.create
//!
//! # Which routes can a user open?
//! portal route --role user /team
//!
//! # Capability flags for a feature
//! portal features --role admin customers
//!
//! # Dump the active policy as an editable document
//! portal policy show > policy.toml
//! ```

mod commands;
mod style;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use portal_config::ConfigLoader;
use portal_rbac::Role;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use commands::OutputFormat;
use commands::check::Mode;
use commands::config::ConfigFormat;
use commands::policy::DocumentFormat;

/// Portal - role-based access control for the partner portal.
#[derive(Parser)]
#[command(name = "portal")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Project directory holding portal.toml.
    #[arg(short, long, global = true, default_value = ".")]
    project: PathBuf,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Check whether a role holds permissions.
    Check {
        /// Role to check (omit for an unauthenticated session).
        #[arg(short, long)]
        role: Option<Role>,

        /// Permission identifiers, e.g. projects.create.
        #[arg(required = true)]
        permissions: Vec<String>,

        /// How multiple permissions combine.
        #[arg(short, long, value_enum, default_value = "any")]
        mode: Mode,
    },

    /// Check whether a role may open a route.
    Route {
        /// Role to check (omit for an unauthenticated session).
        #[arg(short, long)]
        role: Option<Role>,

        /// Route path, e.g. /billing.
        path: String,
    },

    /// Show capability flags for a feature namespace.
    Features {
        /// Role to check (omit for an unauthenticated session).
        #[arg(short, long)]
        role: Option<Role>,

        /// Feature namespace, e.g. customers.
        namespace: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List the permissions granted to a role.
    Permissions {
        /// Role to list.
        #[arg(short, long)]
        role: Role,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the role × permission matrix.
    Matrix,

    /// Policy document commands.
    #[command(subcommand)]
    Policy(PolicyCommands),

    /// Configuration commands.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum PolicyCommands {
    /// Print the active policy as a document.
    Show {
        /// Document format.
        #[arg(short, long, value_enum, default_value = "toml")]
        format: DocumentFormat,
    },

    /// Validate a policy document.
    Check {
        /// Path to the policy document.
        path: PathBuf,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the merged configuration.
    Show {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    style::set_no_color(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    let config = ConfigLoader::new()
        .with_project_dir(&cli.project)
        .load()
        .context("Failed to load configuration")?;

    // Initialize logging; RUST_LOG wins over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let load = || commands::load_authorizer(&config);

    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Check {
            role,
            permissions,
            mode,
        } => commands::check::run(&load()?, role, &permissions, mode),
        Commands::Route { role, path } => commands::route::run(&load()?, role, &path),
        Commands::Features {
            role,
            namespace,
            format,
        } => commands::features::run(&load()?, role, &namespace, format),
        Commands::Permissions { role, format } => {
            commands::permissions::run(&load()?, role, format)
        }
        Commands::Matrix => commands::matrix::run(&load()?),
        Commands::Policy(cmd) => match cmd {
            PolicyCommands::Show { format } => commands::policy::show(&load()?, format),
            PolicyCommands::Check { path } => commands::policy::check(&path),
        },
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { format } => {
                commands::config::show(&cli.project, &config, format)
            }
        },
    }
}
