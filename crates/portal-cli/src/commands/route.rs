//! Route access command.

use anyhow::Result;
use portal_rbac::{AccessContext, Authorizer, Role, RouteRequirement};

use crate::style::{print_decision, print_hint};

/// Checks whether `role` may open `path` and explains the requirement.
pub fn run(authorizer: &Authorizer, role: Option<Role>, path: &str) -> Result<()> {
    let allowed = AccessContext::new(authorizer, role).can_access_route(path);
    print_decision(allowed, "allowed", "denied");

    match authorizer.routes().requirement(path) {
        RouteRequirement::AnyOf(required) => {
            let names: Vec<String> = required.to_strings();
            print_hint(&format!("{path} requires any of: {}", names.join(", ")));
        }
        RouteRequirement::Unlisted => {
            let default = authorizer.routes().default_decision().as_str();
            print_hint(&format!("{path} is not listed (default: {default})"));
        }
    }

    if role.is_none() {
        print_hint("unauthenticated sessions are denied every route");
    }

    Ok(())
}
