//! One-shot browser timers.

/// Run `f` after `ms` milliseconds. No-op outside the browser.
pub fn after<F>(ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(ms).await;
        f();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ms, f);
    }
}
