//! Trailing-edge debounce for text inputs.
//!
//! Each call bumps a generation counter and schedules `apply` after the
//! delay; only the call whose generation is still current when its timer
//! fires gets through. On the server there is no timer, so calls apply
//! immediately.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Wrap `apply` so bursts of calls collapse into the last one.
pub fn debounced<T, F>(delay_ms: u32, apply: F) -> impl Fn(T) + Clone + Send + Sync + 'static
where
    T: 'static,
    F: Fn(T) + Send + Sync + 'static,
{
    let generation = Arc::new(AtomicU64::new(0));
    let apply = Arc::new(apply);
    move |value: T| {
        let ticket = generation.fetch_add(1, Ordering::Relaxed).wrapping_add(1);

        #[cfg(feature = "hydrate")]
        {
            let generation = Arc::clone(&generation);
            let apply = Arc::clone(&apply);
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(delay_ms).await;
                if generation.load(Ordering::Relaxed) == ticket {
                    apply(value);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay_ms, ticket);
            apply(value);
        }
    }
}
