//! Role definitions for RBAC.
//!
//! Three roles, assigned when a session is authenticated:
//! - Admin: portal operators, full catalog
//! - Partner: self-service operational access
//! - User: read-only, plus opening support tickets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Role in the access control system.
///
/// RBAC treats the role as an opaque input supplied by the session layer.
/// Nothing here orders roles or derives one role's grants from another's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Portal operator.
    ///
    /// **Permissions:**
    /// - The whole catalog
    /// - Only role that can delete projects, manage compliance, billing and
    ///   team roles
    Admin,

    /// Integration partner running their own projects.
    ///
    /// **Permissions:**
    /// - Create/edit projects, webhooks and API keys
    /// - Generate, schedule and export reports
    /// - View billing, own customers and intelligence
    /// - Cannot delete projects or manage compliance, billing or team roles
    Partner,

    /// Read-only member.
    ///
    /// **Permissions:**
    /// - `*.view` on every namespace except team
    /// - Open support tickets
    User,
}

impl Role {
    /// All roles.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Partner, Role::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Partner => "partner",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseError::UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("partner".parse::<Role>().unwrap(), Role::Partner);
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
    }

    #[test]
    fn test_role_parse_rejects_unknown() {
        assert_eq!(
            "Admin".parse::<Role>(),
            Err(ParseError::UnknownRole("Admin".to_string()))
        );
        assert!("auditor".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_display_matches_serde() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{role}\""));
        }
    }
}
