//! Navigation Bar Component
//!
//! Title plus the reload and proxy toggle controls.

use leptos::prelude::*;

use crate::context::use_dashboard;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};
use crate::view::{power_glyph, reload_icon_class, toggle_button_class};

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="bg-white shadow-sm border-b sticky top-0">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-gray-900">"Proxy Dashboard"</h1>
                    </div>
                    <div class="flex items-center space-x-4">
                        <ReloadButton />
                        <ProxyToggleButton />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Re-fetches the record set; disabled while a fetch is running
#[component]
pub fn ReloadButton() -> impl IntoView {
    let ctx = use_dashboard();
    let store = use_dashboard_store();
    let loading = move || store.fetch_status().get().is_in_flight();

    view! {
        <button
            class="inline-flex items-center px-3 py-2 border border-gray-300 shadow-sm text-sm leading-4 font-medium rounded-md text-gray-700 bg-white hover:bg-gray-50 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 disabled:opacity-50"
            disabled=loading
            on:click=move |_| ctx.fetch_records()
        >
            <span class=move || reload_icon_class(loading())>"⟳"</span>
            "Reload"
        </button>
    }
}

/// Flips the remote proxy flag; colour and label follow the cached state
#[component]
pub fn ProxyToggleButton() -> impl IntoView {
    let ctx = use_dashboard();
    let store = use_dashboard_store();
    let enabled = move || store.proxy().get().enabled;

    view! {
        <button
            class=move || toggle_button_class(enabled())
            disabled=move || store.toggle_status().get().is_in_flight()
            on:click=move |_| ctx.toggle_proxy()
        >
            <span class="inline-block h-4 w-4 mr-2">{move || power_glyph(enabled())}</span>
            {move || format!("Proxy {}", store.proxy().get().label())}
        </button>
    }
}
