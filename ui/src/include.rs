//! Client-side HTML fragment inclusion.
//!
//! Any element carrying the include attribute (`w3-include-html` by default)
//! is a placeholder whose contents are replaced by the fragment its attribute
//! names. Placeholders are drained one at a time in document order and the
//! document is re-scanned after every splice, so markers that arrive inside a
//! fetched fragment are picked up by the same run.
//!
//! A fragment that fails (any status other than 200/404, or no response at
//! all) is rendered as a visible message and the run moves on; one broken
//! include never holds back the rest of the page.

use futures::future::LocalBoxFuture;
use tracing::{debug, warn};

use crate::context::PortalContext;
use crate::dom::PageDom;
use crate::error::PortalResult;
use crate::t;

/// Written verbatim for a 404, whatever the page language.
pub const NOT_FOUND_TEXT: &str = "Page not found.";

/// A fetched fragment as the server answered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentResponse {
    pub status: u16,
    pub body: String,
}

impl FragmentResponse {
    pub fn new<T: Into<String>>(status: u16, body: T) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Where fragment bodies come from (`fetch` on the web, a table in tests).
pub trait FragmentSource {
    /// Resolve `path`. `Err` means no HTTP response was obtained at all.
    fn fetch<'a>(&'a self, path: &'a str) -> LocalBoxFuture<'a, PortalResult<FragmentResponse>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncludeOutcome {
    Included,
    NotFound,
    Failed { status: u16 },
    Unreachable { reason: String },
    /// Marker with a blank path; dropped without a request.
    Skipped,
}

impl IncludeOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::Unreachable { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludedFragment {
    pub path: String,
    pub outcome: IncludeOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeSummary {
    pub fragments: Vec<IncludedFragment>,
    /// The per-run cap was hit with markers still on the page.
    pub truncated: bool,
}

impl IncludeSummary {
    pub fn errors(&self) -> impl Iterator<Item = &IncludedFragment> {
        self.fragments.iter().filter(|f| f.outcome.is_error())
    }

    pub fn is_clean(&self) -> bool {
        !self.truncated && self.errors().next().is_none()
    }
}

impl<D: PageDom> PortalContext<D> {
    /// Drain every include marker on the page.
    ///
    /// Returns `None` when a run is already in progress; that run re-scans
    /// between fragments and will pick up anything new.
    pub async fn include_fragments<S: FragmentSource>(&self, source: &S) -> Option<IncludeSummary> {
        let _slot = self.begin_include()?;
        crate::i18n::init();

        let attribute = self.config().include_attribute.as_str();
        let cap = self.config().max_includes;
        let dom = self.dom();
        let mut summary = IncludeSummary::default();

        while let Some(node) = dom.first_with_attribute(attribute) {
            if summary.fragments.len() >= cap {
                warn!(cap, "include cap reached; leaving remaining markers in place");
                summary.truncated = true;
                break;
            }

            let path = dom.attribute(&node, attribute).unwrap_or_default();
            // Detach before awaiting so the marker can never be picked twice.
            dom.remove_attribute(&node, attribute);
            let path = path.trim().to_string();

            let outcome = if path.is_empty() {
                IncludeOutcome::Skipped
            } else {
                splice(dom, &node, &path, source.fetch(&path).await)
            };

            debug!(%path, ?outcome, "fragment processed");
            summary.fragments.push(IncludedFragment { path, outcome });
        }

        Some(summary)
    }
}

fn splice<D: PageDom>(
    dom: &D,
    node: &D::Node,
    path: &str,
    response: PortalResult<FragmentResponse>,
) -> IncludeOutcome {
    match response {
        Ok(FragmentResponse { status: 200, body }) => {
            dom.set_inner_html(node, &body);
            IncludeOutcome::Included
        }
        Ok(FragmentResponse { status: 404, .. }) => {
            dom.set_inner_html(node, NOT_FOUND_TEXT);
            IncludeOutcome::NotFound
        }
        Ok(FragmentResponse { status, .. }) => {
            warn!(%path, status, "fragment request failed");
            let (path, status_text) = (escape_html(path), status.to_string());
            let message = t!("fragment-failed", path = path, status = status_text);
            dom.set_inner_html(node, &message);
            IncludeOutcome::Failed { status }
        }
        Err(err) => {
            warn!(%path, %err, "fragment unreachable");
            let path = escape_html(path);
            dom.set_inner_html(node, &t!("fragment-unreachable", path = path));
            IncludeOutcome::Unreachable {
                reason: err.to_string(),
            }
        }
    }
}

/// The path is author-controlled attribute text; keep it inert inside innerHTML.
fn escape_html(raw: &str) -> String {
    html_escape::encode_quoted_attribute(raw).into_owned()
}
