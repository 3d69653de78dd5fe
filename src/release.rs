//! Release version and channel derivation
//!
//! Translates a classified git reference into the fixed set of fields the
//! release pipeline consumes. The precedence is: pull-request ref, then
//! pre-release tag, then full-release tag, then the edge fallback for
//! everything else. The derivation is pure and total: malformed input
//! degrades to the edge row with a boundary warning instead of failing.

use crate::boundary::BoundaryWarning;
use crate::config::VersionConfig;
use crate::domain::{GitRef, Version};

/// The fixed set of fields derived from a source-control reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    /// Release version string (e.g. "0.21.0", "pr-4242", "edge")
    pub version: String,
    /// Release channel label (e.g. "0.21", "edge")
    pub channel: String,
    /// Chart version label published alongside the release
    pub chart_version: String,
    /// Whether this build updates the "latest release" marker
    pub update_release: bool,
}

impl ReleaseInfo {
    /// The output fields as KEY=value pairs, in stable order
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("REL_VERSION", self.version.clone()),
            ("REL_CHANNEL", self.channel.clone()),
            ("CHART_VERSION", self.chart_version.clone()),
            ("UPDATE_RELEASE", self.update_release.to_string()),
        ]
    }
}

/// Result of a derivation: the release fields plus any non-fatal warning
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation {
    pub info: ReleaseInfo,
    pub warning: Option<BoundaryWarning>,
}

fn edge_info(config: &VersionConfig) -> ReleaseInfo {
    ReleaseInfo {
        version: config.edge_label.clone(),
        channel: config.edge_label.clone(),
        chart_version: config.dev_chart_version.clone(),
        update_release: false,
    }
}

/// Derive release fields from a classified git reference
///
/// Precedence (first match wins):
/// 1. Pull-request ref: version "pr-<number>", edge channel, dev chart
/// 2. Tag with a parsable version: tag version, "<major>.<minor>" channel;
///    only a non-pre-release tag sets `update_release`
/// 3. Everything else (branches, unknown refs, unparsable tag versions):
///    the edge row
pub fn derive_release(git_ref: &GitRef, config: &VersionConfig) -> Derivation {
    match git_ref {
        GitRef::PullRequest { number } => Derivation {
            info: ReleaseInfo {
                version: format!("{}{}", config.pr_version_prefix, number),
                channel: config.edge_label.clone(),
                chart_version: config.dev_chart_version.clone(),
                update_release: false,
            },
            warning: None,
        },
        GitRef::Tag { name } => {
            let version_part = name.strip_prefix(&config.tag_prefix).unwrap_or(name);
            match Version::parse(version_part) {
                Ok(version) => {
                    let rendered = version.to_string();
                    Derivation {
                        info: ReleaseInfo {
                            channel: version.channel(),
                            chart_version: rendered.clone(),
                            update_release: !version.is_prerelease(),
                            version: rendered,
                        },
                        warning: None,
                    }
                }
                Err(e) => Derivation {
                    info: edge_info(config),
                    warning: Some(BoundaryWarning::UnparsableTagVersion {
                        tag: name.clone(),
                        reason: e.to_string(),
                    }),
                },
            }
        }
        GitRef::Branch { .. } | GitRef::Unknown { .. } => Derivation {
            info: edge_info(config),
            warning: None,
        },
    }
}
