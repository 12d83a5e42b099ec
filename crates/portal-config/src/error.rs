//! Configuration errors

use thiserror::Error;

/// A loaded configuration that cannot be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("logging.level must be one of {expected}, got {found:?}")]
    UnknownLogLevel { found: String, expected: String },

    #[error("project.name must not be empty")]
    EmptyProjectName,

    #[error("could not determine the user configuration directory")]
    NoHomeDirectory,
}
