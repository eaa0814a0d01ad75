//! File collection and output writing.
//!
//! Patterns are expanded with the `glob` crate relative to the configured
//! base directory. Matches are deduplicated across patterns (first
//! occurrence wins); within a pattern `glob` yields paths in sorted order,
//! so the collected sequence is deterministic for a given command line.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use glob::glob;

use crate::error::BessieError;

/// A collected file: its path relative to the base directory and its full
/// content at collection time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: String,
    pub content: String,
}

/// Expand `patterns` relative to `basedir` and read every matched file.
///
/// A pattern matching nothing is not an error; an unreadable matched file
/// is. Matched directories are skipped.
pub fn collect(basedir: &Path, patterns: &[String]) -> Result<Vec<FileEntry>, BessieError> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for pattern in patterns {
        let full_pattern = basedir.join(pattern);
        let matches = glob(&full_pattern.to_string_lossy()).map_err(|e| {
            BessieError::Usage(format!("invalid glob pattern `{pattern}`: {e}"))
        })?;

        for matched in matches {
            let path = matched.map_err(|e| {
                let path = e.path().to_path_buf();
                BessieError::FileAccess {
                    path,
                    source: e.into_error(),
                }
            })?;

            if path.is_dir() {
                continue;
            }
            if !seen.insert(path.clone()) {
                continue;
            }

            let content = fs::read_to_string(&path).map_err(|source| {
                BessieError::FileAccess {
                    path: path.clone(),
                    source,
                }
            })?;

            let relative = path.strip_prefix(basedir).unwrap_or(&path);
            entries.push(FileEntry {
                path: relative.to_string_lossy().replace('\\', "/"),
                content,
            });
        }
    }

    tracing::debug!("Collected {} files from {} patterns", entries.len(), patterns.len());

    Ok(entries)
}

/// Write the model response to the output path, overwriting any existing
/// file.
pub fn write_output(path: &Path, content: &str) -> Result<(), BessieError> {
    fs::write(path, content).map_err(|source| BessieError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn zero_matches_is_an_empty_collection() {
        let dir = tempfile::tempdir().unwrap();

        let entries = collect(dir.path(), &["*.nothing".to_string()]).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn overlapping_patterns_are_deduplicated() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.txt", "alpha");
        touch(dir.path(), "b.txt", "beta");

        let patterns = vec!["*.txt".to_string(), "a.txt".to_string()];
        let entries = collect(dir.path(), &patterns).unwrap();

        let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn content_round_trips_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let content = "fn main() {}\n\n// trailing\n";
        touch(dir.path(), "main.rs", content);

        let entries = collect(dir.path(), &["*.rs".to_string()]).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].content, content);
    }

    #[test]
    fn directories_matching_a_pattern_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        touch(dir.path(), "sub.txt", "text");

        let entries = collect(dir.path(), &["sub*".to_string()]).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "sub.txt");
    }

    #[test]
    fn nested_patterns_use_forward_slash_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        touch(&dir.path().join("src"), "lib.rs", "pub fn f() {}");

        let entries = collect(dir.path(), &["src/*.rs".to_string()]).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "src/lib.rs");
    }

    #[test]
    fn output_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");

        write_output(&path, "first").unwrap();
        write_output(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn unwritable_output_path_is_a_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.md");

        let err = write_output(&path, "text").unwrap_err();
        assert!(matches!(err, BessieError::FileAccess { .. }));
    }
}
