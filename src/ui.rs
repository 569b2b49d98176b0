//! Terminal output.
//!
//! Stdout carries only the computed version or the "no tags" notice so the
//! binary can be captured directly by a calling script. Everything else
//! goes to stderr.

use crate::boundary::BoundaryWarning;
use console::style;

/// Message printed when the remote has no tags at all
pub const NO_TAGS_MESSAGE: &str = "No tags found. Nothing to do.";

/// Print the next version, unadorned, to stdout.
pub fn display_version(version: &str) {
    println!("{}", version);
}

/// Print the informational "no tags" message to stdout.
pub fn display_no_tags() {
    println!("{}", NO_TAGS_MESSAGE);
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("WARNING:").yellow(), warning);
}
