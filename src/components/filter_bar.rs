//! Filter Bar Component
//!
//! Type, category and date-range filters applied to the loaded list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::TypeSelector;
use crate::context::use_app_context;
use crate::filter::{parse_bound, ItemFilter};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Raw date inputs; the filter only holds parsed bounds
    let (from_text, set_from_text) = signal(String::new());
    let (to_text, set_to_text) = signal(String::new());

    let export = move |_| {
        let sort = store.sort().get();
        spawn_local(async move {
            if let Err(e) = commands::export_items_csv(&sort).await {
                ctx.api_error("Ошибка экспорта", &e);
            }
        });
    };

    let reset = move |_| {
        set_from_text.set(String::new());
        set_to_text.set(String::new());
        store.filter().set(ItemFilter::default());
    };

    view! {
        <div class="filter-bar">
            <TypeSelector
                current_type=Signal::derive(move || store.filter().with(|f| f.item_type))
                on_change=move |t| store.filter().write().item_type = t
            />
            <input
                type="text"
                placeholder="Категория"
                prop:value=move || store.filter().with(|f| f.category.clone())
                on:input=move |ev| store.filter().write().category = event_target_value(&ev)
            />
            <label>
                "С "
                <input
                    type="date"
                    prop:value=move || from_text.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        store.filter().write().from = parse_bound(&value);
                        set_from_text.set(value);
                    }
                />
            </label>
            <label>
                "по "
                <input
                    type="date"
                    prop:value=move || to_text.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        store.filter().write().to = parse_bound(&value);
                        set_to_text.set(value);
                    }
                />
            </label>
            <button
                type="button"
                class="cancel-btn"
                disabled=move || store.filter().with(|f| f.is_empty())
                on:click=reset
            >
                "Сбросить"
            </button>
            <button type="button" class="export-btn" on:click=export>"Экспорт CSV"</button>
        </div>
    }
}
