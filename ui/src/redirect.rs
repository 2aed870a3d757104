//! Currency-filtered report navigation.

use tracing::debug;

use crate::context::PortalContext;
use crate::core::{CurrencySelection, Report};
use crate::dom::PageDom;
use crate::error::{PortalError, PortalResult};

impl<D: PageDom> PortalContext<D> {
    /// Current selection of `report`'s currency dropdown.
    pub fn currency_selection(&self, report: Report) -> PortalResult<CurrencySelection> {
        let select = self.require(report.selector_id())?;
        self.selection_of(report, &select)
    }

    fn selection_of(&self, report: Report, select: &D::Node) -> PortalResult<CurrencySelection> {
        let value = self
            .dom()
            .selected_value(select)
            .ok_or_else(|| PortalError::missing(report.selector_id()))?;
        Ok(CurrencySelection::from_option(&value, &self.config().sentinel))
    }

    /// Navigate to `report`, filtered by whatever its dropdown currently selects.
    /// Returns the URL navigated to.
    pub fn refresh_report(&self, report: Report) -> PortalResult<String> {
        let select = self.require(report.selector_id())?;
        self.refresh_report_from(report, &select)
    }

    /// Same as [`refresh_report`](Self::refresh_report) for a dropdown bound by
    /// `data-report` rather than by its well-known id.
    pub fn refresh_report_from(&self, report: Report, select: &D::Node) -> PortalResult<String> {
        let selection = self.selection_of(report, select)?;
        let url = report.url(&selection);
        debug!(%report, %selection, %url, "refreshing report");
        self.dom().navigate(&url)?;
        Ok(url)
    }
}
