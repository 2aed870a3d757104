//! wasm entry point for the member pages.
//!
//! The server templates call plain global functions from inline handlers
//! (`onclick="dropMember()"`, `onchange="refreshDashboard()"`, …). Each export
//! below keeps one of those names and forwards to the shared handler in `ui`.

#![cfg(target_arch = "wasm32")]

use tracing::Level;
use ui::core::{CurrencySelection, PageLinks, Report};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    ui::logging::init(level);

    if let Err(err) = ui::web::boot() {
        tracing::error!(%err, "member portal glue failed to boot");
    }
}

#[wasm_bindgen(js_name = dropMember)]
pub fn drop_member() {
    ui::web::with_portal("dropMember", |ctx| ctx.toggle_member_menu());
}

#[wasm_bindgen(js_name = includeHTML)]
pub fn include_html() {
    if ui::web::portal().is_some() {
        ui::web::include_html();
    }
}

#[wasm_bindgen(js_name = checkNewOption)]
pub fn check_new_option() {
    ui::web::with_portal("checkNewOption", |ctx| ctx.check_new_option());
}

fn refresh(report: Report) {
    ui::web::with_portal(report.legacy_binding(), |ctx| ctx.refresh_report(report));
}

#[wasm_bindgen(js_name = refreshDashboard)]
pub fn refresh_dashboard() {
    refresh(Report::Dashboard);
}

#[wasm_bindgen(js_name = refreshIndex)]
pub fn refresh_index() {
    refresh(Report::Indices);
}

#[wasm_bindgen(js_name = refreshEquity)]
pub fn refresh_equity() {
    refresh(Report::Equities);
}

#[wasm_bindgen(js_name = refreshAccount)]
pub fn refresh_account() {
    refresh(Report::AccountBalance);
}

#[wasm_bindgen(js_name = refreshAccountTxn)]
pub fn refresh_account_txn() {
    refresh(Report::AccountTxn);
}

#[wasm_bindgen(js_name = refreshBank)]
pub fn refresh_bank() {
    refresh(Report::BankInfo);
}

#[wasm_bindgen(js_name = refreshBankTxn)]
pub fn refresh_bank_txn() {
    refresh(Report::BankTxn);
}

#[wasm_bindgen(js_name = refreshTradingTxn)]
pub fn refresh_trading_txn() {
    refresh(Report::TradingTxn);
}

#[wasm_bindgen(js_name = refreshOutstandingTxn)]
pub fn refresh_outstanding_txn() {
    refresh(Report::OutstandingTxn);
}

#[wasm_bindgen(js_name = refreshPortfolio)]
pub fn refresh_portfolio() {
    refresh(Report::Portfolio);
}

#[wasm_bindgen(js_name = refreshTransfer)]
pub fn refresh_transfer() {
    refresh(Report::TransferFunds);
}

/// Pagination hrefs for a report, e.g. `pageLinks("accountBalance", "EUR", 2, 5, 7)`.
/// Returns `undefined` for an unknown report key.
#[wasm_bindgen(js_name = pageLinks)]
pub fn page_links(report: &str, ccy: &str, page: u32, page_size: u32, total_pages: u32) -> JsValue {
    let report: Report = match report.parse() {
        Ok(report) => report,
        Err(err) => {
            tracing::warn!(%err, "pageLinks");
            return JsValue::UNDEFINED;
        }
    };
    let sentinel = ui::web::portal()
        .map(|ctx| ctx.config().sentinel.clone())
        .unwrap_or_else(|| ui::PortalConfig::default().sentinel);
    let selection = CurrencySelection::from_option(ccy, &sentinel);
    let links = PageLinks::new(report, &selection, page, page_size, total_pages);

    serde_json::to_string(&links)
        .ok()
        .and_then(|json| js_sys::JSON::parse(&json).ok())
        .unwrap_or(JsValue::UNDEFINED)
}
