use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::boundary::BoundaryWarning;
use crate::error::{RelkitError, Result};

/// A recipe directory archived into a compressed bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeBundle {
    /// Bundle file name, "<subdirectory>.zip"
    pub name: String,
    /// Zip archive bytes
    pub data: Vec<u8>,
}

/// Collect regular files under `dir`, sorted by name at each level.
/// Symlinks are not followed.
fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            collect_files(&entry.path(), files)?;
        } else if file_type.is_file() {
            files.push(entry.path());
        }
    }

    Ok(())
}

/// Archive entry name: path relative to `root`, '/'-separated
fn entry_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        RelkitError::recipe(format!(
            "File '{}' is outside recipe root '{}'",
            path.display(),
            root.display()
        ))
    })?;

    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(segments.join("/"))
}

/// Archive one recipe directory into an in-memory zip bundle
///
/// Entry paths are relative to the directory root. Returns None for a
/// directory with no files.
pub fn archive_directory(dir: &Path) -> Result<Option<RecipeBundle>> {
    let mut files = Vec::new();
    collect_files(dir, &mut files)?;

    if files.is_empty() {
        return Ok(None);
    }

    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            RelkitError::recipe(format!("Cannot derive bundle name from '{}'", dir.display()))
        })?;

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for file in &files {
        writer.start_file(entry_name(dir, file)?, options)?;
        writer.write_all(&fs::read(file)?)?;
    }

    let cursor = writer.finish()?;

    Ok(Some(RecipeBundle {
        name: format!("{}.zip", name),
        data: cursor.into_inner(),
    }))
}

/// Archive each immediate subdirectory of `dir` into a bundle
///
/// Subdirectories are processed in name order so the resulting entry set
/// is deterministic. Top-level files are ignored; an empty subdirectory
/// yields a warning instead of a bundle. A directory with no
/// subdirectories at all is an error.
pub fn archive_recipes(dir: &Path) -> Result<(Vec<RecipeBundle>, Vec<BoundaryWarning>)> {
    let mut subdirs: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            subdirs.push(entry.path());
        }
    }
    subdirs.sort();

    if subdirs.is_empty() {
        return Err(RelkitError::recipe(format!(
            "No recipe directories found in '{}'",
            dir.display()
        )));
    }

    let mut bundles = Vec::new();
    let mut warnings = Vec::new();

    for subdir in subdirs {
        match archive_directory(&subdir)? {
            Some(bundle) => bundles.push(bundle),
            None => warnings.push(BoundaryWarning::EmptyRecipeDirectory {
                path: subdir.display().to_string(),
            }),
        }
    }

    Ok((bundles, warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    fn write_file(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn zip_entry_names(bundle: &RecipeBundle) -> Vec<String> {
        let reader = Cursor::new(bundle.data.clone());
        let mut archive = zip::ZipArchive::new(reader).unwrap();
        (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect()
    }

    #[test]
    fn test_archive_directory_relative_entries() {
        let dir = TempDir::new().unwrap();
        let recipe = dir.path().join("rediscache");
        write_file(&recipe, "main.tf", "resource {}\n");
        write_file(&recipe, "modules/db/variables.tf", "variable {}\n");

        let bundle = archive_directory(&recipe).unwrap().unwrap();
        assert_eq!(bundle.name, "rediscache.zip");

        let names = zip_entry_names(&bundle);
        assert_eq!(names, vec!["main.tf", "modules/db/variables.tf"]);
    }

    #[test]
    fn test_archive_directory_empty_is_none() {
        let dir = TempDir::new().unwrap();
        let recipe = dir.path().join("empty");
        fs::create_dir(&recipe).unwrap();

        assert!(archive_directory(&recipe).unwrap().is_none());
    }

    #[test]
    fn test_archive_preserves_content() {
        let dir = TempDir::new().unwrap();
        let recipe = dir.path().join("sqldb");
        write_file(&recipe, "main.tf", "output \"id\" {}\n");

        let bundle = archive_directory(&recipe).unwrap().unwrap();
        let reader = Cursor::new(bundle.data);
        let mut archive = zip::ZipArchive::new(reader).unwrap();
        let mut content = String::new();
        archive
            .by_name("main.tf")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "output \"id\" {}\n");
    }

    #[test]
    fn test_archive_recipes_sorted_with_warnings() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "zeta/main.tf", "z\n");
        write_file(dir.path(), "alpha/main.tf", "a\n");
        fs::create_dir(dir.path().join("hollow")).unwrap();
        // Top-level files are not bundles
        write_file(dir.path(), "README.md", "docs\n");

        let (bundles, warnings) = archive_recipes(dir.path()).unwrap();
        let names: Vec<&str> = bundles.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["alpha.zip", "zeta.zip"]);

        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            warnings[0],
            BoundaryWarning::EmptyRecipeDirectory { .. }
        ));
    }

    #[test]
    fn test_archive_recipes_no_subdirectories_is_error() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "loose.tf", "x\n");

        assert!(archive_recipes(dir.path()).is_err());
    }
}
