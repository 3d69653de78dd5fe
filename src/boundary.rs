use std::fmt;

/// Warnings for non-fatal conditions hit while processing pipeline inputs.
/// These are reported to the user but never fail the command.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag exists but its version part cannot be parsed as a semantic version
    UnparsableTagVersion { tag: String, reason: String },
    /// Test report was skipped (missing, unreadable, or not valid UTF-8)
    SkippedReport { path: String, reason: String },
    /// Recipe subdirectory contains no files and produced no bundle
    EmptyRecipeDirectory { path: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTagVersion { tag, reason } => {
                write!(
                    f,
                    "Cannot parse version from tag '{}': {} - treating as edge build",
                    tag, reason
                )
            }
            BoundaryWarning::SkippedReport { path, reason } => {
                write!(f, "Skipping report '{}': {}", path, reason)
            }
            BoundaryWarning::EmptyRecipeDirectory { path } => {
                write!(f, "Recipe directory '{}' is empty, no bundle produced", path)
            }
        }
    }
}
