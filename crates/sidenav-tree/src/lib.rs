//! Sidebar tree model and validation for sidenav.
//!
//! A sidebars file is a JSON object keying sidebar names to ordered node
//! lists. Nodes are either doc references or collapsible categories, and
//! categories may carry a generated-index link summarizing their items.
//!
//! Loading is a one-shot pipeline: read, parse, validate. Validation walks
//! the whole tree once and collects every violation before failing, so a
//! malformed file reports all of its problems in one pass and a partially
//! valid tree is never handed to a consumer.
//!
//! # Quick Start
//!
//! ```
//! use sidenav_tree::Sidebars;
//!
//! let sidebars = Sidebars::from_json(r#"{
//!     "defaultSidebar": [
//!         { "type": "doc", "id": "quick-start", "label": "Quick Start" }
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(sidebars.get("defaultSidebar").unwrap().len(), 1);
//! ```

mod doc_index;
mod node;
mod validate;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use doc_index::DocIndex;
pub use node::{Category, DocRef, IndexLink, Node};
pub use validate::{Issue, ValidationReport};

/// Sidebar error.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// File not found.
    #[error("Sidebars file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing error.
    #[error("Sidebars parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// One or more validation failures.
    #[error("Invalid sidebars: {0}")]
    Invalid(ValidationReport),
}

/// The full navigation configuration: sidebar name to ordered node list.
///
/// Immutable once loaded; changes require re-authoring the file and
/// reloading. Loading the same file twice yields equal values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sidebars(BTreeMap<String, Vec<Node>>);

impl Sidebars {
    /// Load and validate a sidebars file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable, is not valid
    /// JSON in the sidebars schema, or fails validation. Validation errors
    /// carry a report of every violation found.
    pub fn load(path: &Path) -> Result<Self, SidebarError> {
        if !path.exists() {
            return Err(SidebarError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loading sidebars file");
        Self::from_json(&content)
    }

    /// Parse and validate sidebars from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails.
    pub fn from_json(json: &str) -> Result<Self, SidebarError> {
        let sidebars: Self = serde_json::from_str(json)?;
        sidebars.validate()?;
        Ok(sidebars)
    }

    /// Validate the whole tree, collecting every violation.
    ///
    /// Checks that doc ids and generated-index slugs are unique across the
    /// tree (they share one route namespace), that index-bearing categories
    /// have items, and that ids, labels, and slugs are non-empty.
    ///
    /// # Errors
    ///
    /// Returns `SidebarError::Invalid` with the full violation report.
    pub fn validate(&self) -> Result<(), SidebarError> {
        let report = validate::check_tree(self);
        if report.is_empty() {
            tracing::debug!(sidebars = self.0.len(), "Sidebars validated");
            Ok(())
        } else {
            Err(SidebarError::Invalid(report))
        }
    }

    /// Check every doc reference against a scanned docs directory.
    ///
    /// # Errors
    ///
    /// Returns `SidebarError::Invalid` listing every doc id with no backing
    /// page.
    pub fn validate_against(&self, index: &DocIndex) -> Result<(), SidebarError> {
        let report = validate::check_references(self, index);
        if report.is_empty() {
            Ok(())
        } else {
            Err(SidebarError::Invalid(report))
        }
    }

    /// Get a sidebar's node list by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[Node]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// Iterate over sidebars by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Node])> {
        self.0.iter().map(|(name, nodes)| (name.as_str(), nodes.as_slice()))
    }

    /// Number of sidebars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the configuration defines no sidebars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Sidebars {
    type Item = (&'a String, &'a Vec<Node>);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Vec<Node>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
