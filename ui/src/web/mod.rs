//! Browser bindings: the live [`PageDom`](crate::dom::PageDom), the fetch
//! source, and the page-lifetime event listeners.
//!
//! The context is built once per page (`boot`) and kept in a thread-local;
//! the exported entry points in the `web` crate reach it through
//! [`with_portal`]. Listener closures are parked in thread-locals as well so
//! they live exactly as long as the page.

mod dom;
mod fetch;

pub use dom::WebDom;
pub use fetch::FetchSource;

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::config::{PortalConfig, CONFIG_ELEMENT_ID};
use crate::context::PortalContext;
use crate::core::platform;
use crate::core::Report;
use crate::error::{PortalError, PortalResult};

type Handler = Closure<dyn FnMut(Event)>;

thread_local! {
    static PORTAL: RefCell<Option<Rc<PortalContext<WebDom>>>> = const { RefCell::new(None) };
    static OUTSIDE_CLICK_HANDLER: RefCell<Option<Handler>> = const { RefCell::new(None) };
    static REPORT_CHANGE_HANDLERS: RefCell<Vec<Handler>> = const { RefCell::new(Vec::new()) };
}

/// Build the page context, attach listeners and start fragment inclusion.
/// Safe to call more than once; only the first call does anything.
pub fn boot() -> PortalResult<()> {
    if PORTAL.with(|slot| slot.borrow().is_some()) {
        return Ok(());
    }

    crate::i18n::init();
    let dom = WebDom::current()?;
    let config = read_config(dom.document());
    let ctx = Rc::new(PortalContext::new(dom, config));
    PORTAL.with(|slot| *slot.borrow_mut() = Some(ctx.clone()));

    install_outside_click(&ctx)?;
    bind_report_selects(&ctx);
    include_html();
    info!("member portal glue ready");
    Ok(())
}

/// The page context, booting it on first use.
pub fn portal() -> Option<Rc<PortalContext<WebDom>>> {
    if let Err(err) = boot() {
        warn!(%err, "portal unavailable");
        return None;
    }
    PORTAL.with(|slot| slot.borrow().clone())
}

/// Run a handler against the page context. Missing controls are expected on
/// pages that lack a widget and are logged as no-ops.
pub fn with_portal<R>(
    action: &str,
    f: impl FnOnce(&PortalContext<WebDom>) -> PortalResult<R>,
) -> Option<R> {
    let ctx = portal()?;
    match f(&ctx) {
        Ok(value) => Some(value),
        Err(err) if err.is_missing_element() => {
            warn!(action, %err, "skipped");
            None
        }
        Err(err) => {
            tracing::error!(action, %err, "failed");
            None
        }
    }
}

/// Start (or nudge) fragment inclusion for the current document.
pub fn include_html() {
    let Some(ctx) = PORTAL.with(|slot| slot.borrow().clone()) else {
        return;
    };
    platform::spawn_future(async move {
        let source = FetchSource::new(ctx.dom().window().clone(), ctx.config().fetch_timeout_ms);
        match ctx.include_fragments(&source).await {
            Some(summary) if summary.is_clean() => {
                debug!(count = summary.fragments.len(), "fragments included");
            }
            Some(summary) => {
                warn!(
                    count = summary.fragments.len(),
                    errors = summary.errors().count(),
                    truncated = summary.truncated,
                    "fragment inclusion finished with problems"
                );
            }
            None => debug!("fragment inclusion already running"),
        }
    });
}

fn read_config(document: &Document) -> PortalConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    PortalConfig::from_json(&raw).unwrap_or_else(|err| {
        warn!(%err, "ignoring portal-config block");
        PortalConfig::default()
    })
}

fn install_outside_click(ctx: &Rc<PortalContext<WebDom>>) -> PortalResult<()> {
    if OUTSIDE_CLICK_HANDLER.with(|slot| slot.borrow().is_some()) {
        return Ok(());
    }

    let handler_ctx = Rc::clone(ctx);
    let handler = Closure::wrap(Box::new(move |event: Event| {
        let target = event.target().and_then(|t| t.dyn_into::<Element>().ok());
        match handler_ctx.dismiss_member_menu(target.as_ref()) {
            Ok(_) => {}
            // Pages without the member menu still receive clicks.
            Err(err) if err.is_missing_element() => {}
            Err(err) => warn!(%err, "outside-click dismissal failed"),
        }
    }) as Box<dyn FnMut(Event)>);

    ctx.dom()
        .window()
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(|_| PortalError::Unavailable("click listener"))?;
    OUTSIDE_CLICK_HANDLER.with(|slot| *slot.borrow_mut() = Some(handler));
    Ok(())
}

/// `<select data-report="accountBalance">` redirects on change without inline handlers.
fn bind_report_selects(ctx: &Rc<PortalContext<WebDom>>) {
    let Ok(selects) = ctx.dom().document().query_selector_all("select[data-report]") else {
        return;
    };

    for index in 0..selects.length() {
        let Some(select) = selects.get(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let key = select.get_attribute("data-report").unwrap_or_default();
        let report: Report = match key.parse() {
            Ok(report) => report,
            Err(err) => {
                warn!(%err, "unbound currency selector");
                continue;
            }
        };

        let bound = select.clone();
        let handler = Closure::wrap(Box::new(move |_event: Event| {
            with_portal(report.legacy_binding(), |ctx| {
                ctx.refresh_report_from(report, &bound)
            });
        }) as Box<dyn FnMut(Event)>);

        if select
            .add_event_listener_with_callback("change", handler.as_ref().unchecked_ref())
            .is_ok()
        {
            debug!(%report, "currency selector bound");
            REPORT_CHANGE_HANDLERS.with(|slot| slot.borrow_mut().push(handler));
        }
    }
}
