use futures::future::{self, Either, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

use crate::error::{PortalError, PortalResult};
use crate::include::{FragmentResponse, FragmentSource};

/// Fragment source backed by `window.fetch`, bounded by a timeout.
pub struct FetchSource {
    window: Window,
    timeout_ms: u32,
}

impl FetchSource {
    pub fn new(window: Window, timeout_ms: u32) -> Self {
        Self { window, timeout_ms }
    }
}

impl FragmentSource for FetchSource {
    fn fetch<'a>(&'a self, path: &'a str) -> LocalBoxFuture<'a, PortalResult<FragmentResponse>> {
        Box::pin(async move {
            let request = fetch_text(&self.window, path);
            futures::pin_mut!(request);
            match future::select(request, TimeoutFuture::new(self.timeout_ms)).await {
                Either::Left((result, _)) => result,
                Either::Right(_) => Err(PortalError::Fetch {
                    path: path.to_string(),
                    reason: format!("no response within {} ms", self.timeout_ms),
                }),
            }
        })
    }
}

async fn fetch_text(window: &Window, path: &str) -> PortalResult<FragmentResponse> {
    let failure = |reason: &str| PortalError::Fetch {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    let response: Response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|_| failure("network error"))?
        .dyn_into()
        .map_err(|_| failure("fetch did not yield a Response"))?;

    let status = response.status();
    let text = response.text().map_err(|_| failure("body unreadable"))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|_| failure("body unreadable"))?
        .as_string()
        .unwrap_or_default();

    Ok(FragmentResponse { status, body })
}
