//! Terminal output formatting.
//!
//! Pure display functions; the CLI decides what to print, the core never
//! prints anything.

use std::cmp::Ordering;

use console::style;

use crate::config::OutputConfig;
use crate::domain::SemanticVersion;
use crate::sources::ResolvedVersion;

/// Apply the configured color switch process-wide.
pub fn apply_color_choice(config: &OutputConfig) {
    if !config.color {
        console::set_colors_enabled(false);
    }
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a resolved version, optionally with the file it came from.
///
/// # Arguments
/// * `resolved` - The resolution result to display
/// * `show_source` - Whether to print the originating file and source name
pub fn display_resolved(resolved: &ResolvedVersion, show_source: bool) {
    println!("{}", style(resolved.version.to_string()).green().bold());
    if show_source {
        println!(
            "  {} {} ({})",
            style("source:").dim(),
            resolved.path.display(),
            resolved.source
        );
    }
}

/// Display the precedence relation between two versions.
pub fn display_comparison(left: &SemanticVersion, ordering: Ordering, right: &SemanticVersion) {
    let symbol = match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    println!("{} {} {}", left, style(symbol).bold(), right);
}
