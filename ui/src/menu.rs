//! Member dropdown menu: explicit toggle and outside-click dismissal.

use tracing::debug;

use crate::context::PortalContext;
use crate::dom::PageDom;
use crate::error::PortalResult;

impl<D: PageDom> PortalContext<D> {
    /// Flip the menu's visible class. Returns whether the menu is now shown.
    pub fn toggle_member_menu(&self) -> PortalResult<bool> {
        let cfg = self.config();
        let menu = self.require(&cfg.menu_id)?;
        let shown = self.dom().toggle_class(&menu, &cfg.menu_visible_class);
        debug!(shown, "member menu toggled");
        Ok(shown)
    }

    /// Document click handler. `target` is `None` when the event target is not an element.
    ///
    /// Returns `true` when this click closed the menu.
    pub fn dismiss_member_menu(&self, target: Option<&D::Node>) -> PortalResult<bool> {
        let cfg = self.config();
        let dom = self.dom();

        if target.is_some_and(|node| dom.matches(node, &cfg.menu_trigger_selector)) {
            return Ok(false);
        }

        let menu = self.require(&cfg.menu_id)?;
        if !dom.has_class(&menu, &cfg.menu_visible_class) {
            return Ok(false);
        }
        dom.remove_class(&menu, &cfg.menu_visible_class);
        debug!("member menu dismissed by outside click");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::PortalConfig;
    use crate::context::PortalContext;
    use crate::dom::{MemoryDom, MemoryElement, NodeId, PageDom};

    fn page() -> (PortalContext<MemoryDom>, NodeId, NodeId, NodeId) {
        let dom = MemoryDom::new();
        let trigger = dom.push(MemoryElement::new("button").class("dropbtn"));
        let menu = dom.push(MemoryElement::new("div").id("memberDropdown").class("dropdown-content"));
        let elsewhere = dom.push(MemoryElement::new("p"));
        (PortalContext::new(dom, PortalConfig::default()), trigger, menu, elsewhere)
    }

    #[test]
    fn toggle_twice_restores_state() {
        let (ctx, _, menu, _) = page();
        assert!(ctx.toggle_member_menu().unwrap());
        assert!(ctx.dom().has_class(&menu, "show"));
        assert!(!ctx.toggle_member_menu().unwrap());
        assert!(!ctx.dom().has_class(&menu, "show"));
    }

    #[test]
    fn click_on_trigger_keeps_menu_open() {
        let (ctx, trigger, menu, _) = page();
        ctx.toggle_member_menu().unwrap();
        assert!(!ctx.dismiss_member_menu(Some(&trigger)).unwrap());
        assert!(ctx.dom().has_class(&menu, "show"));
    }

    #[test]
    fn click_elsewhere_closes_open_menu() {
        let (ctx, _, menu, elsewhere) = page();
        ctx.toggle_member_menu().unwrap();
        assert!(ctx.dismiss_member_menu(Some(&elsewhere)).unwrap());
        assert!(!ctx.dom().has_class(&menu, "show"));
        assert!(ctx.dom().has_class(&menu, "dropdown-content"));
    }

    #[test]
    fn click_without_element_target_counts_as_outside() {
        let (ctx, _, _, _) = page();
        ctx.toggle_member_menu().unwrap();
        assert!(ctx.dismiss_member_menu(None).unwrap());
    }

    #[test]
    fn closed_menu_is_left_alone() {
        let (ctx, _, _, elsewhere) = page();
        assert!(!ctx.dismiss_member_menu(Some(&elsewhere)).unwrap());
    }

    #[test]
    fn missing_menu_is_a_reported_noop() {
        let ctx = PortalContext::new(MemoryDom::new(), PortalConfig::default());
        assert!(ctx.toggle_member_menu().unwrap_err().is_missing_element());
        assert!(ctx.dismiss_member_menu(None).unwrap_err().is_missing_element());
    }
}
