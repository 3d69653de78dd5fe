// tests/release_test.rs
//
// End-to-end derivation checks going through reference classification,
// version parsing, and field rendering, the way the version subcommand
// wires them together.

use relkit::config::VersionConfig;
use relkit::domain::GitRef;
use relkit::git::{MockRefSource, RefSource};
use relkit::release::derive_release;

fn derive(raw_ref: &str) -> relkit::release::Derivation {
    derive_release(&GitRef::parse(raw_ref), &VersionConfig::default())
}

#[test]
fn test_pull_request_ref_precedence() {
    let d = derive("refs/pull/1913/merge");
    assert_eq!(d.info.version, "pr-1913");
    assert_eq!(d.info.channel, "edge");
    assert_eq!(d.info.chart_version, "0.42.42-dev");
    assert!(!d.info.update_release);
}

#[test]
fn test_prerelease_tag_ref() {
    let d = derive("refs/tags/v0.21.0-rc.3");
    assert_eq!(d.info.version, "0.21.0-rc.3");
    assert_eq!(d.info.channel, "0.21");
    assert_eq!(d.info.chart_version, "0.21.0-rc.3");
    assert!(!d.info.update_release);
}

#[test]
fn test_full_release_tag_ref() {
    let d = derive("refs/tags/v0.21.0");
    assert_eq!(d.info.version, "0.21.0");
    assert_eq!(d.info.channel, "0.21");
    assert_eq!(d.info.chart_version, "0.21.0");
    assert!(d.info.update_release);
}

#[test]
fn test_branch_ref_falls_back_to_edge() {
    let d = derive("refs/heads/main");
    assert_eq!(d.info.version, "edge");
    assert_eq!(d.info.channel, "edge");
    assert!(!d.info.update_release);
    assert!(d.warning.is_none());
}

#[test]
fn test_empty_ref_falls_back_to_edge() {
    let d = derive("");
    assert_eq!(d.info.version, "edge");
}

#[test]
fn test_unparsable_tag_warns() {
    let d = derive("refs/tags/v2024-release");
    assert_eq!(d.info.version, "edge");
    assert!(d.warning.is_some());
}

#[test]
fn test_derivation_through_mock_ref_source() {
    let source = MockRefSource::new("refs/tags/v1.4.2");
    let raw = source.current_ref().unwrap();
    let d = derive_release(&GitRef::parse(&raw), &VersionConfig::default());
    assert_eq!(d.info.version, "1.4.2");
    assert_eq!(d.info.channel, "1.4");
}

#[test]
fn test_pairs_render_all_fields() {
    let d = derive("refs/tags/v0.30.1");
    let pairs = d.info.to_pairs();
    let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        keys,
        vec!["REL_VERSION", "REL_CHANNEL", "CHART_VERSION", "UPDATE_RELEASE"]
    );
}
