//! Hostname-gated analytics snippet injection.
//!
//! Builds the vendor `<script>` tag and inserts it into an HTML document
//! body at most once. On development hosts the injection is a no-op for the
//! whole lifetime of the document; there is no later re-check.
//!
//! The vendor script loads deferred and asynchronous, so injection never
//! blocks page rendering; its completion is fire-and-forget.
//!
//! # Quick Start
//!
//! ```
//! use sidenav_analytics::Snippet;
//!
//! let snippet = Snippet::new(
//!     "https://analytics.example.com/script.js",
//!     "e74c2feb-1a0c-4eca-a208-30efd9546015",
//! );
//!
//! let page = "<html><body><h1>Docs</h1></body></html>";
//! let injected = snippet.inject(page, "docs.example.com").unwrap();
//! assert!(injected.contains("data-website-id"));
//!
//! // Development hosts are left untouched
//! let local = snippet.inject(page, "localhost").unwrap();
//! assert_eq!(local, page);
//! ```

use std::borrow::Cow;
use std::fmt::Write;

/// Hostnames treated as development environments.
pub const DEV_HOSTS: &[&str] = &["localhost", "127.0.0.1"];

/// Whether a hostname belongs to a development environment.
#[must_use]
pub fn is_dev_host(hostname: &str) -> bool {
    DEV_HOSTS.contains(&hostname)
}

/// Analytics error.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    /// The document has no closing `</body>` tag to inject before.
    ///
    /// Injection only makes sense inside a body-bearing HTML document;
    /// anything else is a precondition failure of the host environment.
    #[error("document has no closing </body> tag")]
    MissingBody,
}

/// The vendor script reference: fixed endpoint plus site identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    script_url: String,
    website_id: String,
}

impl Snippet {
    /// Create a snippet for a vendor endpoint and site identifier.
    #[must_use]
    pub fn new(script_url: impl Into<String>, website_id: impl Into<String>) -> Self {
        Self {
            script_url: script_url.into(),
            website_id: website_id.into(),
        }
    }

    /// The `<script>` tag this snippet injects.
    #[must_use]
    pub fn script_tag(&self) -> String {
        let mut tag = String::new();
        write!(
            tag,
            r#"<script type="text/javascript" defer async src="{}" data-website-id="{}"></script>"#,
            escape_attr(&self.script_url),
            escape_attr(&self.website_id),
        )
        .unwrap();
        tag
    }

    /// Inject the script tag into an HTML document, at most once.
    ///
    /// Development hostnames and documents that already carry the snippet
    /// are returned unchanged, so repeated passes over the same document
    /// never add a second tag. Otherwise the tag is inserted immediately
    /// before the final closing `</body>`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::MissingBody`] if the document has no
    /// closing `</body>` tag.
    pub fn inject<'a>(&self, html: &'a str, hostname: &str) -> Result<Cow<'a, str>, AnalyticsError> {
        if is_dev_host(hostname) {
            tracing::debug!(hostname, "Development host, skipping analytics injection");
            return Ok(Cow::Borrowed(html));
        }

        let marker = format!(r#"data-website-id="{}""#, escape_attr(&self.website_id));
        if html.contains(&marker) {
            tracing::debug!("Analytics snippet already present, skipping injection");
            return Ok(Cow::Borrowed(html));
        }

        let at = find_body_close(html).ok_or(AnalyticsError::MissingBody)?;
        let tag = self.script_tag();
        let mut out = String::with_capacity(html.len() + tag.len());
        out.push_str(&html[..at]);
        out.push_str(&tag);
        out.push_str(&html[at..]);
        tracing::debug!(hostname, "Injected analytics snippet");
        Ok(Cow::Owned(out))
    }
}

/// Byte offset of the final closing `</body>` tag, case-insensitive.
fn find_body_close(html: &str) -> Option<usize> {
    let lower = html.to_ascii_lowercase();
    lower.rfind("</body>")
}

/// Escape a string for use inside a double-quoted HTML attribute.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
