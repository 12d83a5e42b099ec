//! Version command implementation.

use portal_rbac::{Permission, Role};

/// Version information for the CLI.
const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

pub fn run() {
    println!("{NAME} {VERSION}");
    println!();
    println!("Access control tooling for the partner portal.");
    println!();
    println!("Catalog:");
    println!("  Roles:        {}", Role::ALL.len());
    println!("  Permissions:  {}", Permission::ALL.len());
    println!("  Target:       {}", std::env::consts::ARCH);
    println!("  OS:           {}", std::env::consts::OS);
}
