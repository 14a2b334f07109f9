//! Analytics Panel Component
//!
//! Date-range statistics as a table and a bar chart, plus CSV export.

use leptos::prelude::*;
use leptos::task::spawn_local;
use ui_shared::RequestSeq;

use crate::chart;
use crate::commands;
use crate::components::BarChart;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AnalyticsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let requests = RequestSeq::new();
    let (loading, set_loading) = signal(false);

    let load = move |_| {
        let range = store.range().get();
        if range.is_inverted() {
            ctx.error("Дата начала позже даты окончания");
            return;
        }
        let ticket = requests.issue();
        set_loading.set(true);

        spawn_local(async move {
            let result = commands::get_analytics(&range).await;
            if !ticket.is_current() {
                web_sys::console::log_1(&format!("[ANALYTICS] dropped stale response #{}", ticket.id()).into());
                return;
            }
            set_loading.set(false);
            match result {
                Ok(Some(data)) => {
                    web_sys::console::log_1(&format!("[ANALYTICS] {:?}", data).into());
                    store.analytics().set(Some(data));
                }
                Ok(None) => {
                    store.analytics().set(None);
                    ctx.success("Нет данных за выбранный период");
                }
                Err(e) => ctx.api_error("Ошибка получения аналитики", &e),
            }
        });
    };

    let export = move |_| {
        let range = store.range().get();
        if range.is_inverted() {
            ctx.error("Дата начала позже даты окончания");
            return;
        }
        spawn_local(async move {
            if let Err(e) = commands::export_analytics_csv(&range).await {
                ctx.api_error("Ошибка экспорта", &e);
            }
        });
    };

    view! {
        <section class="analytics-panel">
            <h2>"Аналитика"</h2>
            <div class="analytics-controls">
                <label>
                    "С "
                    <input
                        type="date"
                        prop:value=move || store.range().with(|r| r.from.clone())
                        on:input=move |ev| store.range().write().from = event_target_value(&ev)
                    />
                </label>
                <label>
                    "по "
                    <input
                        type="date"
                        prop:value=move || store.range().with(|r| r.to.clone())
                        on:input=move |ev| store.range().write().to = event_target_value(&ev)
                    />
                </label>
                <button type="button" disabled=move || loading.get() on:click=load>"Показать"</button>
                <button type="button" class="export-btn" on:click=export>"Экспорт CSV"</button>
            </div>

            {move || store.analytics().get().map(|data| {
                let rows = chart::layout(&data);
                view! {
                    <table class="analytics-table">
                        <tbody>
                            {rows.into_iter().map(|bar| view! {
                                <tr>
                                    <th>{bar.caption}</th>
                                    <td>{bar.label}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                    <BarChart data=data />
                }
            })}
        </section>
    }
}
