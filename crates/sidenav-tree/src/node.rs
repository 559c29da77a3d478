//! Sidebar node types.
//!
//! A node is either a reference to a single documentation page ([`DocRef`])
//! or a named, collapsible grouping ([`Category`]) that may nest further
//! nodes. The authoring format allows a bare string as shorthand for a doc
//! node with that id.

use serde::{Deserialize, Serialize};

/// A sidebar node: a doc reference or a collapsible category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", from = "RawNode")]
pub enum Node {
    /// Reference to a single documentation page.
    Doc(DocRef),
    /// Named grouping of nested nodes.
    Category(Category),
}

/// Reference to a documentation page by stable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocRef {
    /// Stable page identifier (e.g., "matchers/request-matchers").
    pub id: String,
    /// Display label; the host derives one from the page when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DocRef {
    /// Create a doc reference without an explicit label.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }
}

/// A named, collapsible grouping of nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display label.
    pub label: String,
    /// Whether the category renders collapsed initially.
    #[serde(default = "default_collapsed")]
    pub collapsed: bool,
    /// Optional link to an auto-generated index page summarizing `items`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<IndexLink>,
    /// Ordered child nodes; order determines render order.
    pub items: Vec<Node>,
}

/// Categories render collapsed unless the author says otherwise.
fn default_collapsed() -> bool {
    true
}

/// Link from a category to an auto-generated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum IndexLink {
    /// Auto-generated index page listing the category's items.
    GeneratedIndex {
        /// Route slug of the generated page.
        slug: String,
    },
}

impl IndexLink {
    /// The route slug this link resolves to.
    #[must_use]
    pub fn slug(&self) -> &str {
        match self {
            Self::GeneratedIndex { slug } => slug,
        }
    }
}

/// Accepts both the shorthand string form and the tagged object form.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNode {
    Shorthand(String),
    Full(FullNode),
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum FullNode {
    Doc(DocRef),
    Category(Category),
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        match raw {
            RawNode::Shorthand(id) => Self::Doc(DocRef::new(id)),
            RawNode::Full(FullNode::Doc(doc)) => Self::Doc(doc),
            RawNode::Full(FullNode::Category(category)) => Self::Category(category),
        }
    }
}
