//! Proxy Dashboard App
//!
//! Root component: builds the store and shared context, then renders the
//! dashboard page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::Dashboard;
use crate::config::DashboardConfig;
use crate::context::DashboardContext;
use crate::store::DashboardState;

#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::default();
    let store = Store::new(DashboardState::new());

    // Provide store, config and operations to all children
    provide_context(store);
    provide_context(DashboardContext::new(store, &config));
    provide_context(config);

    view! { <Dashboard /> }
}
