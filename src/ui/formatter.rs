//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user
//! interaction. Functions here are pure (no I/O side effects beyond
//! printing) and testable.

use crate::boundary::BoundaryWarning;
use crate::recipes::RecipeBundle;
use crate::release::ReleaseInfo;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning);
}

/// Display the derived release fields.
///
/// Shown when the fields go to an environment file, so the job log still
/// records what was derived.
pub fn display_release_info(info: &ReleaseInfo) {
    println!("\n\x1b[1mDerived release fields:\x1b[0m");
    for (key, value) in info.to_pairs() {
        println!("  {} = \x1b[32m{}\x1b[0m", key, value);
    }
}

/// Display the bundles that will make up the ConfigMap.
pub fn display_bundle_summary(bundles: &[RecipeBundle]) {
    println!("\n\x1b[1mRecipe bundles ({}):\x1b[0m", bundles.len());
    for bundle in bundles {
        println!(
            "  - {} \x1b[36m({} bytes)\x1b[0m",
            bundle.name,
            bundle.data.len()
        );
    }
}
