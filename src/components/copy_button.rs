//! Copy Button Component
//!
//! Copies a record's code and briefly shows a "copied" glyph.

use leptos::prelude::*;

use crate::context::use_dashboard;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};
use crate::view::{copy_glyph, copy_title};

/// Per-record copy control
///
/// # Arguments
/// * `id` - Record whose copied status drives the glyph
/// * `code` - Text written to the clipboard
/// * `class` - Extra classes (the table hides it until row hover)
#[component]
pub fn CopyButton(
    id: i64,
    #[prop(into)] code: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let ctx = use_dashboard();
    let store = use_dashboard_store();
    let copied = move || store.copied().read().is_copied(id);

    view! {
        <button
            type="button"
            class=format!("ml-2 px-1 text-gray-400 hover:text-gray-700 focus:outline-none {}", class)
            title=move || copy_title(copied())
            on:click=move |ev| {
                ev.stop_propagation();
                ctx.copy_code(code.clone(), id);
            }
        >
            {move || copy_glyph(copied())}
        </button>
    }
}
