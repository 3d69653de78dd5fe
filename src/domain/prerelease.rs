//! Pre-release label handling for semantic versioning
//!
//! Recognizes the well-known identifiers (alpha, beta, rc) with an optional
//! iteration number, and carries anything else verbatim as a custom label.
//! According to semver.org: https://semver.org/#spec-item-9

use crate::error::{RelkitError, Result};
use std::fmt;
use std::str::FromStr;

/// Pre-release identifier type (alpha, beta, rc, or custom)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum PreReleaseType {
    /// Alpha pre-release
    Alpha,
    /// Beta pre-release
    Beta,
    /// Release candidate
    ReleaseCandidate,
    /// Custom pre-release identifier, kept as written
    Custom(String),
}

impl FromStr for PreReleaseType {
    type Err = RelkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "alpha" | "a" => Ok(PreReleaseType::Alpha),
            "beta" | "b" => Ok(PreReleaseType::Beta),
            "rc" => Ok(PreReleaseType::ReleaseCandidate),
            other => {
                if !other.is_empty()
                    && other.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '.')
                {
                    Ok(PreReleaseType::Custom(other.to_string()))
                } else {
                    Err(RelkitError::version(format!(
                        "Invalid pre-release identifier: '{}'",
                        s
                    )))
                }
            }
        }
    }
}

impl fmt::Display for PreReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreReleaseType::Alpha => write!(f, "alpha"),
            PreReleaseType::Beta => write!(f, "beta"),
            PreReleaseType::ReleaseCandidate => write!(f, "rc"),
            PreReleaseType::Custom(s) => write!(f, "{}", s),
        }
    }
}

/// Pre-release label with optional iteration number
///
/// "rc.1" parses to ReleaseCandidate with iteration 1; a label whose tail
/// is not a plain number ("nightly.x86") is kept whole as a custom
/// identifier so every legal semver pre-release can round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreRelease {
    /// The pre-release identifier (alpha, beta, rc, or custom)
    pub identifier: PreReleaseType,
    /// Optional iteration number (incremented per release cycle)
    pub iteration: Option<u32>,
}

impl PreRelease {
    /// Create a new pre-release label
    pub fn new(identifier: PreReleaseType, iteration: Option<u32>) -> Self {
        PreRelease {
            identifier,
            iteration,
        }
    }

    /// Parse a pre-release label from a string
    ///
    /// Accepts formats like "beta", "beta.1", "rc.2", or any dotted
    /// alphanumeric-hyphen identifier sequence.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(RelkitError::version("Empty pre-release identifier"));
        }

        if let Some((head, tail)) = s.split_once('.') {
            if let Ok(iteration) = tail.parse::<u32>() {
                return Ok(PreRelease {
                    identifier: head.parse()?,
                    iteration: Some(iteration),
                });
            }
            // Tail is not a plain iteration number; keep the whole label
            return Ok(PreRelease {
                identifier: s.parse()?,
                iteration: None,
            });
        }

        Ok(PreRelease {
            identifier: s.parse()?,
            iteration: None,
        })
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)?;
        if let Some(iter) = self.iteration {
            write!(f, ".{}", iter)?;
        }
        Ok(())
    }
}
