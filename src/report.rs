//! Test-report path rewriting
//!
//! CI runners produce JUnit documents whose `file="..."` attributes carry
//! absolute runner paths. Stripping the workspace prefix makes the report
//! portable: downstream annotators expect repository-relative paths.

use regex::Regex;
use std::fs;
use std::path::Path;

use crate::boundary::BoundaryWarning;
use crate::error::{RelkitError, Result};

/// Outcome of processing a single report file
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    /// Report processed; count of rewritten attributes (0 means no-op)
    Rewritten { replaced: usize },
    /// Report skipped, with the warning to surface
    Skipped(BoundaryWarning),
}

/// Rewrite `file="<prefix>/..."` attributes to be repository-relative
///
/// Returns the rewritten document and the number of attributes changed.
/// A document with no matches comes back unchanged with a zero count.
pub fn rewrite_document(document: &str, prefix: &str) -> Result<(String, usize)> {
    let pattern = format!(r#"file="{}/?([^"]*)""#, regex::escape(prefix));
    let re = Regex::new(&pattern)
        .map_err(|e| RelkitError::report(format!("Cannot build attribute pattern: {}", e)))?;

    let mut replaced = 0usize;
    let rewritten = re.replace_all(document, |captures: &regex::Captures<'_>| {
        replaced += 1;
        format!(r#"file="{}""#, &captures[1])
    });

    Ok((rewritten.into_owned(), replaced))
}

/// Rewrite one report file in place
///
/// A missing, unreadable, or non-UTF-8 file is tolerated: the outcome is
/// a skip carrying the reason, and the caller decides how to surface it.
/// With `output`, the rewritten document goes there instead of back to
/// `path`.
pub fn rewrite_report_file(
    path: &Path,
    prefix: &str,
    output: Option<&Path>,
) -> Result<ReportOutcome> {
    let skip = |reason: String| {
        ReportOutcome::Skipped(BoundaryWarning::SkippedReport {
            path: path.display().to_string(),
            reason,
        })
    };

    if !path.exists() {
        return Ok(skip("file not found".to_string()));
    }

    let raw = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => return Ok(skip(format!("cannot read: {}", e))),
    };

    let document = match String::from_utf8(raw) {
        Ok(text) => text,
        Err(_) => return Ok(skip("not valid UTF-8".to_string())),
    };

    let (rewritten, replaced) = rewrite_document(&document, prefix)?;

    let destination = output.unwrap_or(path);
    fs::write(destination, rewritten)?;

    Ok(ReportOutcome::Rewritten { replaced })
}
