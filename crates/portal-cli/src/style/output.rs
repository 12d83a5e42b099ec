//! One-line message helpers.

use super::colors::Toned;

/// Prints an allow/deny verdict.
pub fn print_decision(allowed: bool, yes: &str, no: &str) {
    if allowed {
        println!("{} {}", "✓".granted(), yes.granted());
    } else {
        println!("{} {}", "✗".denied(), no.denied());
    }
}

pub fn print_success(msg: &str) {
    println!("{} {msg}", "✓".granted());
}

/// Warnings go to stderr so JSON on stdout stays parseable.
pub fn print_warn(msg: &str) {
    eprintln!("{} {msg}", "⚠".caution());
}

pub fn print_hint(msg: &str) {
    println!("{} {}", "→".quiet(), msg.quiet());
}

pub fn print_header(msg: &str) {
    println!("{}", msg.heading());
}

/// Prints an indented `key: value` line.
pub fn print_labeled(key: &str, value: &str) {
    println!("  {}: {value}", key.quiet());
}
