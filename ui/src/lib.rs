//! Member portal glue for Virtual Trading.
//!
//! The server renders every member page; this crate only wires the bits of
//! behaviour those pages expect from script: the member menu, currency
//! filtered report navigation, HTML fragment includes and the trading form's
//! "new portfolio" fields. All of it runs against [`dom::PageDom`] so the
//! handlers are exercised natively in tests; the `web` module supplies the
//! browser implementation.

pub mod config;
pub mod context;
pub mod core;
pub mod dom;
pub mod error;
pub mod i18n;
pub mod include;
pub mod logging;

mod menu;
mod redirect;
mod trading;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::PortalConfig;
pub use context::PortalContext;
pub use error::{PortalError, PortalResult};
