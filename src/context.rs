//! Dashboard Context
//!
//! Operations shared with every component via the Leptos Context API.
//! Each operation owns its own status in the store; fetch, toggle and
//! copy may all be in flight at once.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::clipboard;
use crate::config::DashboardConfig;
use crate::store::DashboardStore;
use crate::timers::CopyTimers;

#[derive(Clone, Copy)]
pub struct DashboardContext {
    store: DashboardStore,
    client: StoredValue<ApiClient>,
    copy_feedback: Duration,
    /// Pending copy-expiry timers by record id; dropping one cancels it
    copy_timers: StoredValue<CopyTimers<Timeout>, LocalStorage>,
}

impl DashboardContext {
    pub fn new(store: DashboardStore, config: &DashboardConfig) -> Self {
        Self {
            store,
            client: StoredValue::new(ApiClient::new(config.endpoint.clone())),
            copy_feedback: config.copy_feedback,
            copy_timers: StoredValue::new_local(CopyTimers::default()),
        }
    }

    /// Reload the record set from the server
    pub fn fetch_records(&self) {
        let store = self.store;
        let client = self.client.get_value();
        store.write().begin_fetch();
        log::debug!("[FETCH] GET {}", client.endpoint);

        spawn_local(async move {
            let result = client.fetch_records().await;
            match &result {
                Ok(records) => log::info!("[FETCH] Loaded {} records", records.len()),
                Err(e) => log::error!("[FETCH] Error fetching data: {}", e),
            }
            if let Some(mut state) = store.try_write() {
                state.finish_fetch(result);
            }
        });
    }

    /// Ask the server for the opposite of the cached proxy state
    pub fn toggle_proxy(&self) {
        let store = self.store;
        let client = self.client.get_value();
        let desired = store.write().begin_toggle();
        log::debug!("[PROXY] PUT {{ proxy: {} }}", desired.wire_value());

        spawn_local(async move {
            let result = client.set_proxy(desired).await;
            match &result {
                Ok(()) => log::info!("[PROXY] Proxy toggled: {{ proxy: {} }}", desired.wire_value()),
                // Cached state is kept as-is and may now disagree with the server
                Err(e) => log::error!("[PROXY] Error toggling proxy: {}", e),
            }
            if let Some(mut state) = store.try_write() {
                state.finish_toggle(desired, result);
            }
        });
    }

    /// Copy `text` and flag record `id` as copied for the feedback window
    pub fn copy_code(&self, text: String, id: i64) {
        let store = self.store;
        let copy_timers = self.copy_timers;
        let millis = u32::try_from(self.copy_feedback.as_millis()).unwrap_or(u32::MAX);

        spawn_local(async move {
            let result = clipboard::write_text(&text).await;
            if let Err(e) = &result {
                log::error!("[COPY] Failed to copy record {}: {}", id, e);
            }
            let ticket = store.try_write().and_then(|mut state| state.finish_copy(id, result));
            let Some(ticket) = ticket else {
                return;
            };
            log::debug!("[COPY] Copied record {}", id);

            let timeout = Timeout::new(millis, move || {
                if let Some(mut state) = store.try_write() {
                    state.copied.expire(id, ticket);
                }
            });
            // Replacing an entry drops, and so cancels, the previous timer
            copy_timers.try_update_value(|timers| timers.arm(id, timeout));
        });
    }

    /// Cancel every pending copy-expiry timer
    pub fn cancel_copy_timers(&self) {
        let cancelled = self
            .copy_timers
            .try_update_value(|timers| timers.clear())
            .unwrap_or_default();
        if cancelled > 0 {
            log::debug!("[COPY] Dropped {} copy timers", cancelled);
        }
    }
}

/// Get the dashboard context
pub fn use_dashboard() -> DashboardContext {
    use_context::<DashboardContext>().expect("DashboardContext should be provided")
}
