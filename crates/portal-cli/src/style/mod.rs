//! Terminal styling for `portal` output.
//!
//! Colors are decided once at startup: `--no-color` or a set `NO_COLOR`
//! environment variable turns every helper here into plain text.

use std::sync::atomic::{AtomicBool, Ordering};

pub mod colors;
pub mod output;
pub mod table;

pub use output::*;
pub use table::*;

static PLAIN: AtomicBool = AtomicBool::new(false);

/// Switches all styled output to plain text.
pub fn set_no_color(value: bool) {
    PLAIN.store(value, Ordering::Relaxed);
}

/// Returns `true` when output must not carry ANSI escapes.
pub fn no_color() -> bool {
    PLAIN.load(Ordering::Relaxed)
}
