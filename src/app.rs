//! Finance Tracker App
//!
//! Main application component: entry form, filters, item table and analytics.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use ui_shared::{Notice, NoticeBanner, RequestSeq};

use crate::commands;
use crate::components::{AnalyticsPanel, FilterBar, ItemTable, NewItemForm, SortSelector};
use crate::context::AppContext;
use crate::store::{visible_items, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let notice = RwSignal::new(None::<Notice>);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), notice);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Reload items when the trigger or the sort order changes
    let requests = RequestSeq::new();
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let sort = store.sort().get();
        let ticket = requests.issue();
        web_sys::console::log_1(&format!("[APP] Loading items, sort={:?}, trigger={}", sort, trigger).into());
        spawn_local(async move {
            let result = commands::list_items(&sort).await;
            if !ticket.is_current() {
                web_sys::console::log_1(&format!("[APP] Dropped stale item list #{}", ticket.id()).into());
                return;
            }
            match result {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} items", loaded.len()).into());
                    store.items().set(loaded);
                }
                Err(e) => ctx.api_error("Ошибка загрузки записей", &e),
            }
        });
    });

    // Table contents: last fetched list through the current filter
    let visible = Memo::new(move |_| visible_items(store));

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Учёт доходов и расходов"</h1>

                <NoticeBanner notice=notice />

                <NewItemForm />

                <div class="toolbar">
                    <FilterBar />
                    <SortSelector />
                </div>

                <ItemTable items=visible />

                <p class="item-count">
                    {move || format!("{} из {} записей", visible.get().len(), store.items().with(|i| i.len()))}
                </p>

                <AnalyticsPanel />
            </main>
        </div>
    }
}
