//! Dashboard Component
//!
//! Page layout. Loads records once on mount and cancels pending copy
//! timers when torn down.

use leptos::prelude::*;

use crate::components::{NavBar, RecordsPanel};
use crate::context::use_dashboard;

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_dashboard();

    // Initial load
    Effect::new(move |_| {
        ctx.fetch_records();
    });

    on_cleanup(move || ctx.cancel_copy_timers());

    view! {
        <div class="min-h-screen bg-gray-50">
            <NavBar />
            <RecordsPanel />
        </div>
    }
}
