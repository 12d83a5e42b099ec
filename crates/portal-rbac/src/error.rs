//! Error types.
//!
//! Authorization predicates never fail; these errors only arise when text is
//! turned into typed values (parsing, policy documents).

use std::path::PathBuf;
use thiserror::Error;

/// Text that does not name a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown role: {0:?}")]
    UnknownRole(String),

    #[error("Unknown feature namespace: {0:?}")]
    UnknownNamespace(String),

    #[error("Unknown action: {0:?}")]
    UnknownAction(String),

    #[error("Unknown permission: {0:?}")]
    UnknownPermission(String),
}

/// Failure to build an authorizer from a policy document.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Failed to read policy file at {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse policy document: {0}")]
    Syntax(#[from] toml::de::Error),

    #[error("Unknown role {role:?} in policy document")]
    UnknownRole { role: String },

    #[error("Unknown permission {permission:?} in {context}")]
    UnknownPermission { context: String, permission: String },

    #[error("Invalid route {route:?}: routes must start with '/'")]
    InvalidRoute { route: String },
}

/// Result type for policy loading.
pub type Result<T> = std::result::Result<T, PolicyError>;
