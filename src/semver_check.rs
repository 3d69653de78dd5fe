//! Strict semantic-version validation
//!
//! The release derivation tolerates sloppy tags by degrading to the edge
//! row; this module is the opposite: the full semver grammar, enforced via
//! the `semver` crate, for pipeline steps that must reject bad versions.

use crate::error::{RelkitError, Result};

/// Validate that a string matches the semantic-versioning grammar
///
/// An optional tag prefix (e.g. "v") is stripped before validation when
/// given. Returns the parsed version so callers can inspect components.
pub fn validate(input: &str, tag_prefix: Option<&str>) -> Result<semver::Version> {
    let candidate = match tag_prefix {
        Some(prefix) => input.strip_prefix(prefix).unwrap_or(input),
        None => input,
    };

    semver::Version::parse(candidate).map_err(|e| {
        RelkitError::version(format!("'{}' is not a valid semantic version: {}", input, e))
    })
}
