//! Sort Selector Component
//!
//! Toggle buttons for server-side sorting. Selection order is the sort
//! priority; changing it reloads the list.

use leptos::prelude::*;

use crate::models::SORT_FIELDS;
use crate::store::{toggle_sort, use_app_store, AppStateStoreFields};

#[component]
pub fn SortSelector() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="sort-selector">
            <span class="toolbar-label">"Сортировка:"</span>
            {SORT_FIELDS.iter().map(|field| {
                let field = *field;
                let position = move || store.sort().with(|s| s.iter().position(|f| *f == field));
                view! {
                    <button
                        type="button"
                        class=move || if position().is_some() { "type-btn small active" } else { "type-btn small" }
                        on:click=move |_| toggle_sort(&mut store.sort().write(), field)
                    >
                        {field.label()}
                        {move || position().map(|p| format!(" {}", p + 1))}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
