//! Record Table Component
//!
//! Wide-viewport layout: one table row per record.

use leptos::prelude::*;

use crate::components::CopyButton;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn RecordTable() -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        <div class="hidden sm:block">
            <div class="overflow-hidden shadow ring-1 ring-black ring-opacity-5 md:rounded-lg">
                <table class="min-w-full divide-y divide-gray-300">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"ID"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Code"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Owner"</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        <For
                            each=move || store.records().get()
                            key=|record| record.id
                            children=move |record| {
                                view! {
                                    <tr class="group hover:bg-gray-50">
                                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">
                                            {record.id}
                                        </td>
                                        <td class="px-6 py-4 text-sm text-gray-500">
                                            <span class="font-mono break-all">{record.code.clone()}</span>
                                            <CopyButton
                                                id=record.id
                                                code=record.code.clone()
                                                class="opacity-0 group-hover:opacity-100"
                                            />
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                            <span class="inline-flex px-2 py-1 text-xs font-semibold rounded-full bg-blue-100 text-blue-800">
                                                {record.owner.clone()}
                                            </span>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}
