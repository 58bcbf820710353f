//! Browser Timers

use async_trait::async_trait;
use chrono::Utc;
use leptos::prelude::*;
use std::time::Duration;

use studio_core::{Pause, Result, StudioPage};

/// `Pause` backed by `setTimeout`
pub struct BrowserPause;

#[async_trait(?Send)]
impl Pause for BrowserPause {
    async fn pause(&self, duration: Duration) -> Result<()> {
        gloo_timers::future::sleep(duration).await;
        Ok(())
    }
}

const TOAST_SWEEP_MS: u32 = 500;

/// Periodically drop expired toasts for the lifetime of the page
pub fn spawn_toast_sweeper(page: RwSignal<StudioPage>) {
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(TOAST_SWEEP_MS).await;
            // Skip the write (and the re-render) when nothing is showing
            if page.with_untracked(|p| p.toasts.is_empty()) {
                continue;
            }
            page.update(|p| {
                p.toasts.expire(Utc::now());
            });
        }
    });
}
