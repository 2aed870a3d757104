//! Page-level configuration for the glue layer.
//!
//! Defaults reproduce the identifiers the member templates already use, so a
//! page only needs a `portal-config` JSON block when it deviates from them:
//!
//! ```html
//! <script type="application/json" id="portal-config">
//!   { "fetch_timeout_ms": 5000 }
//! </script>
//! ```

use serde::{Deserialize, Serialize};

use crate::error::PortalResult;

/// Id of the optional `<script type="application/json">` block read at boot.
pub const CONFIG_ELEMENT_ID: &str = "portal-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub menu_id: String,
    pub menu_visible_class: String,
    pub menu_trigger_selector: String,

    pub include_attribute: String,
    /// Upper bound on fragments spliced in a single run (self-including fragments).
    pub max_includes: usize,
    /// Applied by the web fetcher only.
    pub fetch_timeout_ms: u32,

    /// Currency option value meaning "no filter".
    pub sentinel: String,

    pub portfolio_select_id: String,
    pub new_portfolio_value: String,
    pub portfolio_name_id: String,
    pub portfolio_currency_id: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            menu_id: "memberDropdown".into(),
            menu_visible_class: "show".into(),
            menu_trigger_selector: ".dropbtn".into(),
            include_attribute: "w3-include-html".into(),
            max_includes: 64,
            fetch_timeout_ms: 10_000,
            sentinel: "#".into(),
            portfolio_select_id: "portfolio".into(),
            new_portfolio_value: "New".into(),
            portfolio_name_id: "portName".into(),
            portfolio_currency_id: "portCcy".into(),
        }
    }
}

impl PortalConfig {
    /// Parse a (possibly partial) JSON override; absent keys keep their defaults.
    pub fn from_json(raw: &str) -> PortalResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(trimmed)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_member_templates() {
        let cfg = PortalConfig::default();
        assert_eq!(cfg.menu_id, "memberDropdown");
        assert_eq!(cfg.menu_visible_class, "show");
        assert_eq!(cfg.menu_trigger_selector, ".dropbtn");
        assert_eq!(cfg.include_attribute, "w3-include-html");
        assert_eq!(cfg.sentinel, "#");
        assert_eq!(cfg.new_portfolio_value, "New");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = PortalConfig::from_json(r#"{ "fetch_timeout_ms": 2500, "max_includes": 4 }"#)
            .expect("valid json");
        assert_eq!(cfg.fetch_timeout_ms, 2500);
        assert_eq!(cfg.max_includes, 4);
        assert_eq!(cfg.menu_id, "memberDropdown");
    }

    #[test]
    fn blank_block_is_default() {
        assert_eq!(PortalConfig::from_json("  \n").expect("blank"), PortalConfig::default());
    }

    #[test]
    fn malformed_block_is_an_error() {
        let err = PortalConfig::from_json("{ menu_id: ").unwrap_err();
        assert!(matches!(err, crate::error::PortalError::Config(_)));
    }
}
