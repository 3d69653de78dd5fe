use crate::domain::prerelease::PreRelease;
use crate::error::{RelkitError, Result};
use std::fmt;

/// Semantic version representation
///
/// Carries the numeric core plus the optional pre-release label and build
/// metadata that release tags may include (e.g. "1.2.3-rc.1+build.5").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub pre_release: Option<PreRelease>,
    pub build: Option<String>,
}

impl Version {
    /// Create a new version without pre-release or build metadata
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: None,
            build: None,
        }
    }

    /// Parse version from a tag string (e.g., "v1.2.3-rc.1" -> 1.2.3-rc.1)
    ///
    /// Accepts an optional 'v' or 'V' prefix. The pre-release part follows
    /// the first '-' after the numeric core; build metadata follows '+'.
    pub fn parse(tag: &str) -> Result<Self> {
        // Remove 'v' or 'V' prefix
        let clean_tag = tag.trim_start_matches('v').trim_start_matches('V');

        // Split off build metadata first: it may itself contain hyphens
        let (rest, build) = match clean_tag.split_once('+') {
            Some((_, b)) if b.is_empty() => {
                return Err(RelkitError::version(format!(
                    "Empty build metadata in '{}'",
                    tag
                )));
            }
            Some((r, b)) => (r, Some(b.to_string())),
            None => (clean_tag, None),
        };

        let (core, pre_release) = match rest.split_once('-') {
            Some((c, p)) => (c, Some(PreRelease::parse(p)?)),
            None => (rest, None),
        };

        // Split by '.' and parse
        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return Err(RelkitError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                tag
            )));
        }

        let major = parts[0]
            .parse::<u32>()
            .map_err(|_| RelkitError::version(format!("Invalid major version: {}", parts[0])))?;
        let minor = parts[1]
            .parse::<u32>()
            .map_err(|_| RelkitError::version(format!("Invalid minor version: {}", parts[1])))?;
        let patch = parts[2]
            .parse::<u32>()
            .map_err(|_| RelkitError::version(format!("Invalid patch version: {}", parts[2])))?;

        Ok(Version {
            major,
            minor,
            patch,
            pre_release,
            build,
        })
    }

    /// True if this version carries a pre-release label
    pub fn is_prerelease(&self) -> bool {
        self.pre_release.is_some()
    }

    /// Release channel label for this version (e.g. 1.2.3 -> "1.2")
    ///
    /// The channel names the release train, so pre-release versions map to
    /// the same channel as the full release they precede.
    pub fn channel(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(ref pre) = self.pre_release {
            write!(f, "-{}", pre)?;
        }
        if let Some(ref build) = self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prerelease::PreReleaseType;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("v1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
        assert!(v.pre_release.is_none());
        assert!(v.build.is_none());
    }

    #[test]
    fn test_version_parse_without_v() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_uppercase_v() {
        let v = Version::parse("V1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_prerelease() {
        let v = Version::parse("v0.21.0-rc.1").unwrap();
        assert_eq!(v.major, 0);
        assert_eq!(v.minor, 21);
        assert_eq!(v.patch, 0);
        let pre = v.pre_release.as_ref().unwrap();
        assert_eq!(pre.identifier, PreReleaseType::ReleaseCandidate);
        assert_eq!(pre.iteration, Some(1));
        assert!(v.is_prerelease());
    }

    #[test]
    fn test_version_parse_build_metadata() {
        let v = Version::parse("1.2.3+build.5").unwrap();
        assert_eq!(v.build.as_deref(), Some("build.5"));
        assert!(!v.is_prerelease());
    }

    #[test]
    fn test_version_parse_prerelease_and_build() {
        let v = Version::parse("1.2.3-beta.2+20260807").unwrap();
        assert!(v.is_prerelease());
        assert_eq!(v.build.as_deref(), Some("20260807"));
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("v1.2.3.4").is_err());
        assert!(Version::parse("1.2.x").is_err());
        assert!(Version::parse("1.2.3+").is_err());
    }

    #[test]
    fn test_version_channel() {
        assert_eq!(Version::new(0, 21, 3).channel(), "0.21");
        assert_eq!(Version::parse("v1.4.0-rc.2").unwrap().channel(), "1.4");
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
        assert_eq!(
            Version::parse("v1.2.3-rc.1+build").unwrap().to_string(),
            "1.2.3-rc.1+build"
        );
    }
}
