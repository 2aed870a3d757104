//! Pagination links in the member pages' `ccy`/`page`/`pageSize` convention.
//!
//! The server paginates every report with `page` (1-based) and `pageSize`
//! query parameters and keeps the active currency filter in front of them.
//! Widgets that page through a filtered list build their hrefs here so the
//! filter survives the hop.

use serde::Serialize;

use super::currency::CurrencySelection;
use super::reports::Report;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    pub first: String,
    pub prev: String,
    pub next: String,
    pub last: String,
    pub current: String,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageLinks {
    /// Page `0` and page size `0` are treated as `1`; an empty report still has one page.
    pub fn new(
        report: Report,
        selection: &CurrencySelection,
        page: u32,
        page_size: u32,
        total_pages: u32,
    ) -> Self {
        let total = total_pages.max(1);
        let page = page.clamp(1, total);
        let size = page_size.max(1);

        let href = |target: u32| page_url(report, selection, target, size);

        Self {
            first: href(1),
            prev: href(page.saturating_sub(1).max(1)),
            next: href(page.saturating_add(1).min(total)),
            last: href(total),
            current: href(page),
            has_prev: page > 1,
            has_next: page < total,
        }
    }
}

/// `<base>?[ccy=<code>&]page=<n>&pageSize=<m>`
pub fn page_url(report: Report, selection: &CurrencySelection, page: u32, page_size: u32) -> String {
    let mut url = format!("{}?", report.base_path());
    if let Some(pair) = selection.query_pair() {
        url.push_str(&pair);
        url.push('&');
    }
    url.push_str(&format!("page={page}&pageSize={page_size}"));
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eur() -> CurrencySelection {
        CurrencySelection::Code("EUR".into())
    }

    #[test]
    fn middle_page_links() {
        let links = PageLinks::new(Report::AccountBalance, &eur(), 3, 5, 7);
        assert_eq!(links.first, "/member/accountBalance?ccy=EUR&page=1&pageSize=5");
        assert_eq!(links.prev, "/member/accountBalance?ccy=EUR&page=2&pageSize=5");
        assert_eq!(links.next, "/member/accountBalance?ccy=EUR&page=4&pageSize=5");
        assert_eq!(links.last, "/member/accountBalance?ccy=EUR&page=7&pageSize=5");
        assert!(links.has_prev && links.has_next);
    }

    #[test]
    fn edges_are_clamped() {
        let first = PageLinks::new(Report::BankTxn, &CurrencySelection::All, 1, 5, 7);
        assert_eq!(first.prev, "/member/bankTxn?page=1&pageSize=5");
        assert!(!first.has_prev);

        let last = PageLinks::new(Report::BankTxn, &CurrencySelection::All, 7, 5, 7);
        assert_eq!(last.next, "/member/bankTxn?page=7&pageSize=5");
        assert!(!last.has_next);
    }

    #[test]
    fn out_of_range_input_is_normalised() {
        let links = PageLinks::new(Report::Portfolio, &CurrencySelection::All, 0, 0, 0);
        assert_eq!(links.current, "/member/portfolio?page=1&pageSize=1");
        assert_eq!(links.last, links.first);
        assert!(!links.has_prev && !links.has_next);

        let past_end = PageLinks::new(Report::Portfolio, &CurrencySelection::All, 40, 10, 3);
        assert_eq!(past_end.current, "/member/portfolio?page=3&pageSize=10");

        let max = PageLinks::new(Report::Portfolio, &CurrencySelection::All, u32::MAX, 5, u32::MAX);
        assert_eq!(max.next, max.last);
        assert_eq!(max.last, format!("/member/portfolio?page={}&pageSize=5", u32::MAX));
        assert!(!max.has_next);
    }

    #[test]
    fn unfiltered_links_omit_ccy() {
        let links = PageLinks::new(Report::TradingTxn, &CurrencySelection::All, 2, 5, 3);
        assert!(!links.first.contains("ccy="));
        assert!(!links.last.contains("ccy="));
    }
}
