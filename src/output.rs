//! Output of derived release fields
//!
//! Pipeline steps communicate through the environment file named by
//! `GITHUB_ENV`: appending KEY=value lines makes the fields visible to
//! later steps. Outside the pipeline the fields go to stdout.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;

/// Destination for derived KEY=value fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Append to an environment file shared with later pipeline steps
    EnvFile(PathBuf),
    /// Print to standard output
    Stdout,
}

impl OutputTarget {
    /// Resolve the destination: explicit path, else `GITHUB_ENV`, else stdout
    pub fn resolve(explicit: Option<&str>) -> Self {
        if let Some(path) = explicit {
            return OutputTarget::EnvFile(PathBuf::from(path));
        }

        match std::env::var("GITHUB_ENV") {
            Ok(path) if !path.is_empty() => OutputTarget::EnvFile(PathBuf::from(path)),
            _ => OutputTarget::Stdout,
        }
    }

    /// Write the pairs as KEY=value lines
    ///
    /// The environment file is appended to, never truncated: it is shared
    /// with other steps of the same job.
    pub fn write_pairs(&self, pairs: &[(&str, String)]) -> Result<()> {
        match self {
            OutputTarget::EnvFile(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                for (key, value) in pairs {
                    writeln!(file, "{}={}", key, value)?;
                }
            }
            OutputTarget::Stdout => {
                for (key, value) in pairs {
                    println!("{}={}", key, value);
                }
            }
        }

        Ok(())
    }
}
