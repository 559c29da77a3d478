//! `sidenav check` command implementation.

use std::path::PathBuf;

use clap::Args;
use sidenav_config::{CliSettings, Config};
use sidenav_tree::{DocIndex, Node, SidebarError, Sidebars};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover sidenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the sidebars file (overrides config).
    #[arg(short, long)]
    sidebars: Option<PathBuf>,

    /// Docs source directory for the reference check (overrides config).
    #[arg(short, long)]
    docs_dir: Option<PathBuf>,

    /// Skip the doc reference check.
    #[arg(long)]
    no_refs: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the sidebars file is
    /// invalid. Every validation issue is printed before returning.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            source_dir: self.docs_dir,
            sidebars: self.sidebars,
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let sidebars_path = &config.docs_resolved.sidebars;
        output.info(&format!("Checking {}", sidebars_path.display()));

        // Load and validate the tree (structure + uniqueness)
        let sidebars = match Sidebars::load(sidebars_path) {
            Ok(sidebars) => sidebars,
            Err(err) => return Err(report_invalid(&output, err)),
        };

        // Cross-check doc references against the docs directory
        if self.no_refs {
            output.info("Reference check: skipped");
        } else {
            let source_dir = &config.docs_resolved.source_dir;
            if source_dir.exists() {
                let index = DocIndex::scan(source_dir)?;
                output.info(&format!(
                    "Docs directory: {} ({} page(s))",
                    source_dir.display(),
                    index.len()
                ));
                if let Err(err) = sidebars.validate_against(&index) {
                    return Err(report_invalid(&output, err));
                }
            } else {
                output.warning(&format!(
                    "Docs directory not found, skipping reference check: {}",
                    source_dir.display()
                ));
            }
        }

        let docs: usize = sidebars.iter().map(|(_, nodes)| count_docs(nodes)).sum();
        output.success(&format!(
            "Sidebars OK: {} sidebar(s), {} doc reference(s)",
            sidebars.len(),
            docs
        ));

        Ok(())
    }
}

/// Print every issue in an invalid-sidebars error, returning a summary error.
fn report_invalid(output: &Output, err: SidebarError) -> CliError {
    if let SidebarError::Invalid(report) = &err {
        for issue in report.issues() {
            output.error(&format!("  {issue}"));
        }
        return CliError::Validation(format!(
            "{} validation issue(s) found",
            report.len()
        ));
    }
    CliError::Sidebar(err)
}

/// Count doc references across a node list, descending into categories.
fn count_docs(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            Node::Doc(_) => 1,
            Node::Category(category) => count_docs(&category.items),
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_docs_descends_into_categories() {
        let sidebars = Sidebars::from_json(
            r#"{
                "defaultSidebar": [
                    "quick-start",
                    {
                        "type": "category",
                        "label": "Matchers",
                        "items": [
                            "matchers/request-matchers",
                            { "type": "category", "label": "Inner", "items": ["deep/page"] }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        let docs: usize = sidebars.iter().map(|(_, nodes)| count_docs(nodes)).sum();

        assert_eq!(docs, 3);
    }

    #[test]
    fn test_report_invalid_counts_issues() {
        let err = Sidebars::from_json(r#"{ "defaultSidebar": ["dup", "dup"] }"#).unwrap_err();

        let cli_err = report_invalid(&Output::new(), err);

        assert!(matches!(cli_err, CliError::Validation(_)));
        assert!(cli_err.to_string().contains("1 validation issue"));
    }
}
