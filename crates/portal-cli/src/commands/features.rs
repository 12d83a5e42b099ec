//! Feature access command.

use anyhow::Result;
use comfy_table::Cell;
use portal_rbac::{AccessContext, Authorizer, Namespace, Role};

use super::OutputFormat;
use crate::style::{mark, print_grid_table, print_warn};

/// Prints the capability flags of `role` within `namespace`.
pub fn run(
    authorizer: &Authorizer,
    role: Option<Role>,
    namespace: &str,
    format: OutputFormat,
) -> Result<()> {
    if namespace.parse::<Namespace>().is_err() {
        print_warn(&format!("{namespace} is not a known feature namespace"));
    }

    let access = AccessContext::new(authorizer, role).feature_access_named(namespace);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&access)?);
        }
        OutputFormat::Text => {
            let rows = access
                .entries()
                .into_iter()
                .map(|(action, allowed)| {
                    vec![
                        Cell::new(format!("{namespace}.{action}")),
                        mark(allowed, "yes", "no"),
                    ]
                })
                .collect();
            print_grid_table(&["Capability", "Allowed"], rows);
        }
    }

    Ok(())
}
