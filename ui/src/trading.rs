//! Trading-transaction form: the "new portfolio" fields follow the portfolio picker.

use tracing::debug;

use crate::context::PortalContext;
use crate::dom::PageDom;
use crate::error::{PortalError, PortalResult};

impl<D: PageDom> PortalContext<D> {
    /// Enable portfolio name/currency only when the picker selects the "new" option.
    /// Returns whether the fields are enabled.
    pub fn check_new_option(&self) -> PortalResult<bool> {
        let cfg = self.config();
        let picker = self.require(&cfg.portfolio_select_id)?;
        let name = self.require(&cfg.portfolio_name_id)?;
        let currency = self.require(&cfg.portfolio_currency_id)?;

        let value = self
            .dom()
            .selected_value(&picker)
            .ok_or_else(|| PortalError::missing(cfg.portfolio_select_id.as_str()))?;
        let enabled = value == cfg.new_portfolio_value;

        self.dom().set_disabled(&name, !enabled);
        self.dom().set_disabled(&currency, !enabled);
        debug!(enabled, "new-portfolio fields updated");
        Ok(enabled)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::PortalConfig;
    use crate::context::PortalContext;
    use crate::dom::{MemoryDom, MemoryElement, NodeId};

    fn form(selected: &str) -> (PortalContext<MemoryDom>, NodeId) {
        let dom = MemoryDom::new();
        let picker = dom.push(MemoryElement::new("select").id("portfolio").value(selected));
        dom.push(MemoryElement::new("input").id("portName").disabled(true));
        dom.push(MemoryElement::new("select").id("portCcy").disabled(true));
        (PortalContext::new(dom, PortalConfig::default()), picker)
    }

    fn disabled(ctx: &PortalContext<MemoryDom>, id: &str) -> bool {
        ctx.dom().get_by_id(id).expect("field present").disabled
    }

    #[test]
    fn new_enables_both_fields() {
        let (ctx, _) = form("New");
        assert!(ctx.check_new_option().unwrap());
        assert!(!disabled(&ctx, "portName"));
        assert!(!disabled(&ctx, "portCcy"));
    }

    #[test]
    fn existing_portfolio_disables_both_fields() {
        let (ctx, picker) = form("New");
        ctx.check_new_option().unwrap();

        ctx.dom().set_value(picker, "Growth");
        assert!(!ctx.check_new_option().unwrap());
        assert!(disabled(&ctx, "portName"));
        assert!(disabled(&ctx, "portCcy"));
    }

    #[test]
    fn match_is_exact() {
        let (ctx, _) = form("new");
        assert!(!ctx.check_new_option().unwrap());
    }

    #[test]
    fn partial_form_is_left_untouched() {
        let dom = MemoryDom::new()
            .with(MemoryElement::new("select").id("portfolio").value("New"))
            .with(MemoryElement::new("input").id("portName").disabled(true));
        let ctx = PortalContext::new(dom, PortalConfig::default());
        assert!(ctx.check_new_option().unwrap_err().is_missing_element());
        assert!(disabled(&ctx, "portName"));
    }
}
