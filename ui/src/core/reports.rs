//! The fixed set of currency-filterable member report pages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::currency::CurrencySelection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Report {
    Dashboard,
    Indices,
    Equities,
    AccountBalance,
    AccountTxn,
    BankInfo,
    BankTxn,
    TradingTxn,
    OutstandingTxn,
    Portfolio,
    TransferFunds,
}

impl Report {
    pub const ALL: [Report; 11] = [
        Report::Dashboard,
        Report::Indices,
        Report::Equities,
        Report::AccountBalance,
        Report::AccountTxn,
        Report::BankInfo,
        Report::BankTxn,
        Report::TradingTxn,
        Report::OutstandingTxn,
        Report::Portfolio,
        Report::TransferFunds,
    ];

    pub fn base_path(self) -> &'static str {
        match self {
            Report::Dashboard => "/member/dashboard",
            Report::Indices => "/member/indices",
            Report::Equities => "/member/equities",
            Report::AccountBalance => "/member/accountBalance",
            Report::AccountTxn => "/member/accountTxn",
            Report::BankInfo => "/member/bankInfo",
            Report::BankTxn => "/member/bankTxn",
            Report::TradingTxn => "/member/tradingTxn",
            Report::OutstandingTxn => "/member/outstandingTxn",
            Report::Portfolio => "/member/portfolio",
            Report::TransferFunds => "/member/transferFunds",
        }
    }

    /// Id of the currency `<select>` rendered on this report's page.
    pub fn selector_id(self) -> &'static str {
        match self {
            Report::Dashboard => "dashboardCurrency",
            Report::Indices => "indexCurrency",
            Report::Equities => "equityCurrency",
            Report::AccountBalance => "accountCurrency",
            Report::AccountTxn => "accountTxnCurrency",
            Report::BankInfo => "bankCurrency",
            Report::BankTxn => "bankTxnCurrency",
            Report::TradingTxn => "tradingTxnCurrency",
            Report::OutstandingTxn => "osTxnCurrency",
            Report::Portfolio => "portfolioCurrency",
            Report::TransferFunds => "accountCcy",
        }
    }

    /// Global function name the server templates call from `onchange`.
    pub fn legacy_binding(self) -> &'static str {
        match self {
            Report::Dashboard => "refreshDashboard",
            Report::Indices => "refreshIndex",
            Report::Equities => "refreshEquity",
            Report::AccountBalance => "refreshAccount",
            Report::AccountTxn => "refreshAccountTxn",
            Report::BankInfo => "refreshBank",
            Report::BankTxn => "refreshBankTxn",
            Report::TradingTxn => "refreshTradingTxn",
            Report::OutstandingTxn => "refreshOutstandingTxn",
            Report::Portfolio => "refreshPortfolio",
            Report::TransferFunds => "refreshTransfer",
        }
    }

    /// camelCase key used in `data-report` attributes.
    pub fn key(self) -> &'static str {
        match self {
            Report::Dashboard => "dashboard",
            Report::Indices => "indices",
            Report::Equities => "equities",
            Report::AccountBalance => "accountBalance",
            Report::AccountTxn => "accountTxn",
            Report::BankInfo => "bankInfo",
            Report::BankTxn => "bankTxn",
            Report::TradingTxn => "tradingTxn",
            Report::OutstandingTxn => "outstandingTxn",
            Report::Portfolio => "portfolio",
            Report::TransferFunds => "transferFunds",
        }
    }

    /// Navigation target for a selection: bare path, or `?ccy=` when filtered.
    pub fn url(self, selection: &CurrencySelection) -> String {
        match selection.query_pair() {
            Some(pair) => format!("{}?{pair}", self.base_path()),
            None => self.base_path().to_string(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownReport(pub String);

impl fmt::Display for UnknownReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown report `{}`", self.0)
    }
}

impl std::error::Error for UnknownReport {}

impl FromStr for Report {
    type Err = UnknownReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Report::ALL
            .into_iter()
            .find(|r| r.key() == s || r.legacy_binding() == s)
            .ok_or_else(|| UnknownReport(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sentinel_goes_to_bare_path_for_every_report() {
        for report in Report::ALL {
            let sel = CurrencySelection::from_option("#", "#");
            assert_eq!(report.url(&sel), report.base_path());
            assert!(!report.url(&sel).contains('?'));
        }
    }

    #[test]
    fn code_is_appended_for_every_report() {
        for report in Report::ALL {
            let sel = CurrencySelection::from_option("EUR", "#");
            assert_eq!(report.url(&sel), format!("{}?ccy=EUR", report.base_path()));
        }
    }

    #[test]
    fn identifiers_are_unique() {
        let ids: HashSet<_> = Report::ALL.iter().map(|r| r.selector_id()).collect();
        let paths: HashSet<_> = Report::ALL.iter().map(|r| r.base_path()).collect();
        let names: HashSet<_> = Report::ALL.iter().map(|r| r.legacy_binding()).collect();
        assert_eq!(ids.len(), Report::ALL.len());
        assert_eq!(paths.len(), Report::ALL.len());
        assert_eq!(names.len(), Report::ALL.len());
    }

    #[test]
    fn key_matches_base_path_tail() {
        for report in Report::ALL {
            assert_eq!(report.base_path(), format!("/member/{}", report.key()));
        }
    }

    #[test]
    fn parses_key_and_legacy_name() {
        assert_eq!("accountBalance".parse::<Report>(), Ok(Report::AccountBalance));
        assert_eq!("refreshTransfer".parse::<Report>(), Ok(Report::TransferFunds));
        assert!("ledger".parse::<Report>().is_err());
    }

    #[test]
    fn serde_uses_camel_case_keys() {
        let json = serde_json::to_string(&Report::OutstandingTxn).expect("serialise");
        assert_eq!(json, "\"outstandingTxn\"");
    }
}
