//! Tree validation.
//!
//! One recursive traversal over all sidebars that collects every violation
//! before reporting, so a broken file surfaces all of its problems at once.
//!
//! Doc ids and generated-index slugs share a single route namespace: both
//! resolve to pages, so a collision between an id and a slug is as much a
//! duplicate as two identical ids.

use std::collections::BTreeMap;
use std::fmt;

use crate::doc_index::DocIndex;
use crate::node::{Category, IndexLink, Node};
use crate::Sidebars;

/// A single validation violation, identifying the offending node.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Issue {
    /// Two nodes resolve to the same page route.
    #[error("route '{route}' is claimed by both {first} and {second}")]
    DuplicateRoute {
        /// The contested route.
        route: String,
        /// Description of the node that claimed the route first.
        first: String,
        /// Description of the node that claimed it again.
        second: String,
    },
    /// A category declares a generated index over zero items.
    #[error("category '{label}' declares a generated index but has no items")]
    EmptyIndexCategory {
        /// Label of the offending category.
        label: String,
    },
    /// A doc node with an empty id.
    #[error("sidebar '{sidebar}' contains a doc node with an empty id")]
    EmptyDocId {
        /// Sidebar containing the node.
        sidebar: String,
    },
    /// A category with an empty label.
    #[error("sidebar '{sidebar}' contains a category with an empty label")]
    EmptyCategoryLabel {
        /// Sidebar containing the node.
        sidebar: String,
    },
    /// A generated-index link with an empty slug.
    #[error("generated index of category '{label}' has an empty slug")]
    EmptyIndexSlug {
        /// Label of the owning category.
        label: String,
    },
    /// A doc reference with no backing page in the docs directory.
    #[error("doc '{id}' has no backing page in the docs directory")]
    MissingDoc {
        /// The dangling page identifier.
        id: String,
    },
}

/// All violations found in one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<Issue>,
}

impl ValidationReport {
    /// The collected violations, in traversal order.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Whether the pass found no violations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// Validate structure and uniqueness across the whole tree.
pub(crate) fn check_tree(sidebars: &Sidebars) -> ValidationReport {
    let mut walker = Walker::default();
    for (name, nodes) in sidebars {
        walker.walk_nodes(name, nodes);
    }
    walker.report
}

/// Check every doc reference against a scanned docs directory.
pub(crate) fn check_references(sidebars: &Sidebars, index: &DocIndex) -> ValidationReport {
    let mut report = ValidationReport::default();
    for (_, nodes) in sidebars {
        check_nodes_against(nodes, index, &mut report);
    }
    report
}

fn check_nodes_against(nodes: &[Node], index: &DocIndex, report: &mut ValidationReport) {
    for node in nodes {
        match node {
            Node::Doc(doc) => {
                if !index.contains(&doc.id) {
                    report.push(Issue::MissingDoc { id: doc.id.clone() });
                }
            }
            Node::Category(category) => {
                check_nodes_against(&category.items, index, report);
            }
        }
    }
}

/// Recursive traversal state: claimed routes and collected issues.
#[derive(Default)]
struct Walker {
    routes: BTreeMap<String, String>,
    report: ValidationReport,
}

impl Walker {
    fn walk_nodes(&mut self, sidebar: &str, nodes: &[Node]) {
        for node in nodes {
            match node {
                Node::Doc(doc) => {
                    if doc.id.is_empty() {
                        self.report.push(Issue::EmptyDocId {
                            sidebar: sidebar.to_owned(),
                        });
                    } else {
                        self.claim_route(&doc.id, format!("doc '{}'", doc.id));
                    }
                }
                Node::Category(category) => self.walk_category(sidebar, category),
            }
        }
    }

    fn walk_category(&mut self, sidebar: &str, category: &Category) {
        if category.label.is_empty() {
            self.report.push(Issue::EmptyCategoryLabel {
                sidebar: sidebar.to_owned(),
            });
        }

        if let Some(link) = &category.link {
            let IndexLink::GeneratedIndex { slug } = link;
            if slug.is_empty() {
                self.report.push(Issue::EmptyIndexSlug {
                    label: category.label.clone(),
                });
            } else {
                self.claim_route(slug, format!("generated index of '{}'", category.label));
            }

            // An index page summarizing zero items is a configuration error
            if category.items.is_empty() {
                self.report.push(Issue::EmptyIndexCategory {
                    label: category.label.clone(),
                });
            }
        }

        self.walk_nodes(sidebar, &category.items);
    }

    fn claim_route(&mut self, route: &str, claimant: String) {
        if let Some(first) = self.routes.get(route) {
            self.report.push(Issue::DuplicateRoute {
                route: route.to_owned(),
                first: first.clone(),
                second: claimant,
            });
        } else {
            self.routes.insert(route.to_owned(), claimant);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SidebarError;

    fn invalid(json: &str) -> ValidationReport {
        match Sidebars::from_json(json).unwrap_err() {
            SidebarError::Invalid(report) => report,
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_doc_ids_rejected() {
        let report = invalid(
            r#"{ "defaultSidebar": ["quick-start", { "type": "doc", "id": "quick-start" }] }"#,
        );

        assert_eq!(report.len(), 1);
        assert!(matches!(
            &report.issues()[0],
            Issue::DuplicateRoute { route, .. } if route == "quick-start"
        ));
    }

    #[test]
    fn test_duplicate_across_sidebars_rejected() {
        let report = invalid(
            r#"{
                "defaultSidebar": ["quick-start"],
                "apiSidebar": ["quick-start"]
            }"#,
        );

        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_doc_id_colliding_with_index_slug_rejected() {
        let report = invalid(
            r#"{
                "defaultSidebar": [
                    "matchers",
                    {
                        "type": "category",
                        "label": "Matchers",
                        "link": { "type": "generated-index", "slug": "matchers" },
                        "items": ["matchers/request-matchers"]
                    }
                ]
            }"#,
        );

        assert_eq!(report.len(), 1);
        let Issue::DuplicateRoute { route, first, second } = &report.issues()[0] else {
            panic!("expected DuplicateRoute");
        };
        assert_eq!(route, "matchers");
        assert!(first.contains("doc"));
        assert!(second.contains("generated index"));
    }

    #[test]
    fn test_index_category_with_empty_items_rejected() {
        let report = invalid(
            r#"{
                "defaultSidebar": [{
                    "type": "category",
                    "label": "Matchers",
                    "link": { "type": "generated-index", "slug": "matchers" },
                    "items": []
                }]
            }"#,
        );

        assert_eq!(report.len(), 1);
        assert!(matches!(
            &report.issues()[0],
            Issue::EmptyIndexCategory { label } if label == "Matchers"
        ));
    }

    #[test]
    fn test_category_without_link_may_be_empty() {
        let sidebars = Sidebars::from_json(
            r#"{
                "defaultSidebar": [{
                    "type": "category",
                    "label": "Drafts",
                    "items": []
                }]
            }"#,
        );

        assert!(sidebars.is_ok());
    }

    #[test]
    fn test_nested_duplicates_found() {
        let report = invalid(
            r#"{
                "defaultSidebar": [{
                    "type": "category",
                    "label": "Outer",
                    "items": [
                        "page",
                        { "type": "category", "label": "Inner", "items": ["page"] }
                    ]
                }]
            }"#,
        );

        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_all_violations_collected_before_failing() {
        let report = invalid(
            r#"{
                "defaultSidebar": [
                    "dup",
                    "dup",
                    { "type": "doc", "id": "" },
                    {
                        "type": "category",
                        "label": "",
                        "link": { "type": "generated-index", "slug": "" },
                        "items": []
                    }
                ]
            }"#,
        );

        // duplicate, empty id, empty label, empty slug, empty index items
        assert_eq!(report.len(), 5);
    }

    #[test]
    fn test_report_display_identifies_offending_nodes() {
        let report = invalid(
            r#"{
                "defaultSidebar": [
                    "dup",
                    "dup",
                    {
                        "type": "category",
                        "label": "Empty",
                        "link": { "type": "generated-index", "slug": "empty" },
                        "items": []
                    }
                ]
            }"#,
        );

        let msg = report.to_string();
        assert!(msg.contains("dup"));
        assert!(msg.contains("Empty"));
        assert!(msg.contains("; "));
    }

    #[test]
    fn test_check_references_reports_dangling_docs() {
        let sidebars = Sidebars::from_json(
            r#"{ "defaultSidebar": ["quick-start", "missing/page"] }"#,
        )
        .unwrap();
        let index = DocIndex::from_ids(["quick-start"]);

        let err = sidebars.validate_against(&index).unwrap_err();

        let SidebarError::Invalid(report) = err else {
            panic!("expected Invalid");
        };
        assert_eq!(report.len(), 1);
        assert!(matches!(
            &report.issues()[0],
            Issue::MissingDoc { id } if id == "missing/page"
        ));
    }

    #[test]
    fn test_check_references_descends_into_categories() {
        let sidebars = Sidebars::from_json(
            r#"{
                "defaultSidebar": [{
                    "type": "category",
                    "label": "Matchers",
                    "items": ["matchers/request-matchers"]
                }]
            }"#,
        )
        .unwrap();
        let index = DocIndex::from_ids([] as [&str; 0]);

        let err = sidebars.validate_against(&index).unwrap_err();

        assert!(err.to_string().contains("matchers/request-matchers"));
    }

    #[test]
    fn test_check_references_passes_when_all_resolve() {
        let sidebars = Sidebars::from_json(
            r#"{ "defaultSidebar": ["quick-start"] }"#,
        )
        .unwrap();
        let index = DocIndex::from_ids(["quick-start"]);

        assert!(sidebars.validate_against(&index).is_ok());
    }
}
