use std::fmt;

/// Classified form of a source-control reference string
///
/// The release pipeline hands the toolkit fully-qualified refs
/// ("refs/pull/4242/merge", "refs/tags/v0.21.0", "refs/heads/main").
/// Anything else, including the empty string, classifies as Unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitRef {
    /// A pull-request merge or head ref
    PullRequest { number: u64 },
    /// A tag ref, name given without the "refs/tags/" prefix
    Tag { name: String },
    /// A branch ref, name given without the "refs/heads/" prefix
    Branch { name: String },
    /// Any reference that does not match the known forms
    Unknown { raw: String },
}

impl GitRef {
    /// Classify a reference string
    ///
    /// A pull ref whose number segment is not numeric classifies as
    /// Unknown rather than failing: derivation treats unknown refs as
    /// edge builds.
    pub fn parse(raw: &str) -> Self {
        if let Ok(re) = regex::Regex::new(r"^refs/pull/(\d+)(?:/.*)?$") {
            if let Some(captures) = re.captures(raw) {
                if let Some(number) = captures.get(1).and_then(|m| m.as_str().parse().ok()) {
                    return GitRef::PullRequest { number };
                }
            }
        }

        if let Some(name) = raw.strip_prefix("refs/tags/") {
            if !name.is_empty() {
                return GitRef::Tag {
                    name: name.to_string(),
                };
            }
        }

        if let Some(name) = raw.strip_prefix("refs/heads/") {
            if !name.is_empty() {
                return GitRef::Branch {
                    name: name.to_string(),
                };
            }
        }

        GitRef::Unknown {
            raw: raw.to_string(),
        }
    }
}

impl fmt::Display for GitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitRef::PullRequest { number } => write!(f, "refs/pull/{}/merge", number),
            GitRef::Tag { name } => write!(f, "refs/tags/{}", name),
            GitRef::Branch { name } => write!(f, "refs/heads/{}", name),
            GitRef::Unknown { raw } => write!(f, "{}", raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pull_request() {
        assert_eq!(
            GitRef::parse("refs/pull/4242/merge"),
            GitRef::PullRequest { number: 4242 }
        );
        assert_eq!(
            GitRef::parse("refs/pull/7/head"),
            GitRef::PullRequest { number: 7 }
        );
    }

    #[test]
    fn test_parse_pull_request_bad_number() {
        assert_eq!(
            GitRef::parse("refs/pull/abc/merge"),
            GitRef::Unknown {
                raw: "refs/pull/abc/merge".to_string()
            }
        );
    }

    #[test]
    fn test_parse_tag() {
        assert_eq!(
            GitRef::parse("refs/tags/v0.21.0"),
            GitRef::Tag {
                name: "v0.21.0".to_string()
            }
        );
    }

    #[test]
    fn test_parse_branch() {
        assert_eq!(
            GitRef::parse("refs/heads/main"),
            GitRef::Branch {
                name: "main".to_string()
            }
        );
        // Nested branch names keep their slashes
        assert_eq!(
            GitRef::parse("refs/heads/release/0.21"),
            GitRef::Branch {
                name: "release/0.21".to_string()
            }
        );
    }

    #[test]
    fn test_parse_unknown() {
        for raw in ["", "HEAD", "refs/tags/", "refs/notes/commits"] {
            assert_eq!(
                GitRef::parse(raw),
                GitRef::Unknown {
                    raw: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn test_display_round_trip() {
        for raw in ["refs/pull/12/merge", "refs/tags/v1.0.0", "refs/heads/main"] {
            assert_eq!(GitRef::parse(raw).to_string(), raw);
        }
    }
}
