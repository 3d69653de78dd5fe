use crate::error::{RelkitError, Result};
use crate::git::RefSource;
use git2::Repository as Git2Repo;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2RefSource {
    repo: Git2Repo,
}

impl Git2RefSource {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2RefSource { repo })
    }

    /// Find the name of a tag pointing exactly at the given commit
    ///
    /// When several tags point at the same commit the lexicographically
    /// first one wins, so repeated runs describe the checkout identically.
    fn tag_ref_at(&self, commit_id: git2::Oid) -> Result<Option<String>> {
        let mut matches: Vec<String> = Vec::new();

        let references = self.repo.references_glob("refs/tags/*")?;
        for reference in references {
            let reference = reference?;
            let peeled = match reference.peel(git2::ObjectType::Commit) {
                Ok(obj) => obj,
                // Tags on non-commit objects cannot describe a checkout
                Err(_) => continue,
            };
            if peeled.id() == commit_id {
                if let Some(name) = reference.name() {
                    matches.push(name.to_string());
                }
            }
        }

        matches.sort();
        Ok(matches.into_iter().next())
    }
}

impl RefSource for Git2RefSource {
    fn current_ref(&self) -> Result<String> {
        let head = self.repo.head()?;
        let head_commit = head.peel_to_commit().map_err(|e| {
            RelkitError::reference(format!("Cannot resolve HEAD to a commit: {}", e))
        })?;

        if let Some(tag_ref) = self.tag_ref_at(head_commit.id())? {
            return Ok(tag_ref);
        }

        if head.is_branch() {
            if let Some(name) = head.name() {
                return Ok(name.to_string());
            }
        }

        // Detached HEAD without a tag: report the bare commit id, which
        // classifies as an unknown reference downstream
        Ok(head_commit.id().to_string())
    }
}
