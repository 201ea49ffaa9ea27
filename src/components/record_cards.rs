//! Record Cards Component
//!
//! Narrow-viewport layout: stacked cards with truncated codes.

use leptos::prelude::*;

use crate::components::CopyButton;
use crate::config::DashboardConfig;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};
use crate::view::truncate_code;

#[component]
pub fn RecordCards() -> impl IntoView {
    let store = use_dashboard_store();
    let code_limit = expect_context::<DashboardConfig>().mobile_code_limit;

    view! {
        <div class="sm:hidden space-y-4">
            <For
                each=move || store.records().get()
                key=|record| record.id
                children=move |record| {
                    view! {
                        <div class="bg-gray-50 rounded-lg p-4 border border-gray-200">
                            <div class="flex justify-between items-start mb-2">
                                <span class="text-sm font-medium text-gray-900">
                                    {format!("ID: {}", record.id)}
                                </span>
                                <span class="inline-flex px-2 py-1 text-xs font-semibold rounded-full bg-blue-100 text-blue-800">
                                    {record.owner.clone()}
                                </span>
                            </div>
                            <div class="mt-2">
                                <div class="flex justify-between items-center mb-1">
                                    <p class="text-xs text-gray-500">"Code:"</p>
                                    <CopyButton id=record.id code=record.code.clone() />
                                </div>
                                <p class="text-sm font-mono text-gray-900 break-all bg-white p-2 rounded border">
                                    {truncate_code(&record.code, code_limit)}
                                </p>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
