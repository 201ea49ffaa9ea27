//! Records Panel Component
//!
//! Heading with the record count, then loading, empty or populated content.

use leptos::prelude::*;

use crate::components::{RecordCards, RecordTable};
use crate::store::{use_dashboard_store, DashboardStateStoreFields};
use crate::view::{record_area, records_heading, RecordArea};

#[component]
pub fn RecordsPanel() -> impl IntoView {
    let store = use_dashboard_store();
    let count = move || store.records().read().len();
    let area = move || record_area(store.fetch_status().get(), count());

    view! {
        <div class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
            <div class="bg-white shadow rounded-lg">
                <div class="px-4 py-5 sm:p-6">
                    <h2 class="text-lg font-medium text-gray-900 mb-4">
                        {move || records_heading(count())}
                    </h2>
                    {move || match area() {
                        RecordArea::Loading => view! {
                            <div class="flex justify-center items-center py-8">
                                <span class="inline-block text-3xl animate-spin text-blue-500">"⟳"</span>
                                <span class="ml-2 text-gray-600">"Loading data..."</span>
                            </div>
                        }.into_any(),
                        RecordArea::Empty => view! {
                            <div class="text-center py-8">
                                <p class="text-gray-500">"No data available"</p>
                            </div>
                        }.into_any(),
                        RecordArea::Populated => view! {
                            <RecordTable />
                            <RecordCards />
                        }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}
