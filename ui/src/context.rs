//! Handler context: the page handle plus configuration.

use std::cell::Cell;

use crate::config::PortalConfig;
use crate::dom::PageDom;
use crate::error::{PortalError, PortalResult};

/// Everything a handler needs, passed explicitly instead of reached through globals.
pub struct PortalContext<D: PageDom> {
    dom: D,
    config: PortalConfig,
    including: Cell<bool>,
}

impl<D: PageDom> PortalContext<D> {
    pub fn new(dom: D, config: PortalConfig) -> Self {
        Self {
            dom,
            config,
            including: Cell::new(false),
        }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Look up a control by id, turning absence into a reportable no-op.
    pub fn require(&self, id: &str) -> PortalResult<D::Node> {
        self.dom
            .element_by_id(id)
            .ok_or_else(|| PortalError::missing(id))
    }

    /// Claim the fragment-inclusion slot; `None` while another run holds it.
    pub(crate) fn begin_include(&self) -> Option<IncludeSlot<'_>> {
        if self.including.replace(true) {
            None
        } else {
            Some(IncludeSlot {
                flag: &self.including,
            })
        }
    }

    pub fn is_including(&self) -> bool {
        self.including.get()
    }
}

pub(crate) struct IncludeSlot<'a> {
    flag: &'a Cell<bool>,
}

impl Drop for IncludeSlot<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MemoryDom, MemoryElement};

    #[test]
    fn require_reports_missing_ids() {
        let ctx = PortalContext::new(
            MemoryDom::new().with(MemoryElement::new("div").id("present")),
            PortalConfig::default(),
        );
        assert!(ctx.require("present").is_ok());
        let err = ctx.require("absent").unwrap_err();
        assert!(err.is_missing_element());
        assert_eq!(err.to_string(), "element `#absent` is not present on this page");
    }

    #[test]
    fn include_slot_is_exclusive_and_released() {
        let ctx = PortalContext::new(MemoryDom::new(), PortalConfig::default());
        {
            let _slot = ctx.begin_include().expect("first claim");
            assert!(ctx.is_including());
            assert!(ctx.begin_include().is_none());
        }
        assert!(!ctx.is_including());
        assert!(ctx.begin_include().is_some());
    }
}
