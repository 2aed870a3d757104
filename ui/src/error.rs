//! Error type shared by every handler in the glue layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalError {
    /// A control the handler depends on is not on this page.
    #[error("element `#{0}` is not present on this page")]
    MissingElement(String),

    /// `window`/`document` missing (worker or non-browser host).
    #[error("{0} is unavailable")]
    Unavailable(&'static str),

    #[error("navigation to `{0}` was rejected")]
    Navigation(String),

    #[error("fetching `{path}` failed: {reason}")]
    Fetch { path: String, reason: String },

    #[error("invalid portal configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl PortalError {
    pub fn missing<T: Into<String>>(id: T) -> Self {
        Self::MissingElement(id.into())
    }

    /// Missing controls are expected on pages that don't carry a given widget.
    pub fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingElement(_))
    }
}

pub type PortalResult<T> = Result<T, PortalError>;
