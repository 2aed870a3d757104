//! Platform glue for driving futures.

use std::future::Future;

/// Run a future to completion on the current platform's executor.
///
/// On the web this hands the future to the browser's microtask queue; natively
/// it blocks the calling thread (tests and tooling only).
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(future);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        futures::executor::block_on(future);
    }
}
