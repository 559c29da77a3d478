//! Doc id discovery by filesystem walking.
//!
//! Builds the set of page identifiers a docs source directory can serve,
//! for cross-checking sidebar doc references. A file `matchers/request-matchers.md`
//! yields the id `matchers/request-matchers`; a directory `matchers/` with an
//! `index.md` yields the id `matchers`.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Set of page identifiers backed by files in a docs directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocIndex {
    ids: BTreeSet<String>,
}

impl DocIndex {
    /// Scan a docs source directory for markdown-backed page ids.
    ///
    /// Returns an empty index if the directory doesn't exist. Hidden files
    /// and directories are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory inside the tree cannot be read.
    pub fn scan(source_dir: &Path) -> std::io::Result<Self> {
        let mut ids = BTreeSet::new();
        if source_dir.exists() {
            scan_directory(source_dir, "", &mut ids)?;
        }
        tracing::debug!(dir = %source_dir.display(), docs = ids.len(), "Scanned docs directory");
        Ok(Self { ids })
    }

    /// Build an index from known ids (no filesystem access).
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a page id has a backing file.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of discovered pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no pages were discovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Collect page ids under one directory, recursing into subdirectories.
fn scan_directory(
    dir_path: &Path,
    id_prefix: &str,
    ids: &mut BTreeSet<String>,
) -> std::io::Result<()> {
    for entry in fs::read_dir(dir_path)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());

        if is_dir {
            let child_prefix = join_id(id_prefix, &name);
            scan_directory(&path, &child_prefix, ids)?;
        } else if path.extension().is_some_and(|e| e == "md") {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            if stem.eq_ignore_ascii_case("index") {
                // index.md stands for the directory itself
                if !id_prefix.is_empty() {
                    ids.insert(id_prefix.to_owned());
                }
            } else {
                ids.insert(join_id(id_prefix, &stem));
            }
        }
    }
    Ok(())
}

fn join_id(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}/{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_scan_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();

        let index = DocIndex::scan(&dir.path().join("docs")).unwrap();

        assert!(index.is_empty());
    }

    #[test]
    fn test_scan_flat_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "quick-start.md", "# Quick Start");
        write(dir.path(), "faq.md", "# FAQ");

        let index = DocIndex::scan(dir.path()).unwrap();

        assert_eq!(index.len(), 2);
        assert!(index.contains("quick-start"));
        assert!(index.contains("faq"));
    }

    #[test]
    fn test_scan_nested_files_use_slash_ids() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "matchers/request-matchers.md", "# Request");
        write(dir.path(), "matchers/logical-matchers.md", "# Logical");

        let index = DocIndex::scan(dir.path()).unwrap();

        assert!(index.contains("matchers/request-matchers"));
        assert!(index.contains("matchers/logical-matchers"));
        assert!(!index.contains("request-matchers"));
    }

    #[test]
    fn test_index_md_stands_for_directory() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "matchers/index.md", "# Matchers");

        let index = DocIndex::scan(dir.path()).unwrap();

        assert!(index.contains("matchers"));
    }

    #[test]
    fn test_hidden_and_non_markdown_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), ".hidden/page.md", "# Hidden");
        write(dir.path(), "notes.txt", "not markdown");
        write(dir.path(), "guide.md", "# Guide");

        let index = DocIndex::scan(dir.path()).unwrap();

        assert_eq!(index.len(), 1);
        assert!(index.contains("guide"));
    }

    #[test]
    fn test_root_index_md_produces_no_id() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "index.md", "# Home");

        let index = DocIndex::scan(dir.path()).unwrap();

        assert!(index.is_empty());
    }
}
