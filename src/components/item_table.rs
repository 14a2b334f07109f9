//! Item Table Component
//!
//! Renders the filtered items; each row can switch into an inline edit row.

use leptos::prelude::*;
use leptos::task::spawn_local;
use ui_shared::DeleteConfirmButton;

use crate::commands;
use crate::components::EditItemRow;
use crate::context::use_app_context;
use crate::models::Item;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let id = item.id;

    let delete_item = move |_: ()| {
        spawn_local(async move {
            match commands::delete_item(id).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[ITEMS] deleted #{}", id).into());
                    ctx.success(format!("Запись #{} удалена", id));
                    ctx.reload();
                }
                Err(e) => ctx.api_error("Ошибка при удалении", &e),
            }
        });
    };

    move || {
        if store.editing().get() == Some(id) {
            return view! { <EditItemRow item=item.clone() /> }.into_any();
        }
        let type_class = format!("type-{}", item.item_type.css_name());
        view! {
            <tr>
                <td>{id}</td>
                <td class=type_class>{item.item_type.label()}</td>
                <td class="amount">{item.amount}</td>
                <td>{item.day_str().to_string()}</td>
                <td>{item.category.clone()}</td>
                <td class="created-at">{item.created_label().to_string()}</td>
                <td class="row-actions">
                    <button type="button" class="edit-btn" on:click=move |_| store.editing().set(Some(id))>
                        "✎"
                    </button>
                    <DeleteConfirmButton
                        button_class="delete-btn"
                        prompt="Удалить?".to_string()
                        on_confirm=delete_item
                    />
                </td>
            </tr>
        }
        .into_any()
    }
}

#[component]
pub fn ItemTable(items: Memo<Vec<Item>>) -> impl IntoView {
    view! {
        <table class="items-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Тип"</th>
                    <th>"Сумма"</th>
                    <th>"Дата"</th>
                    <th>"Категория"</th>
                    <th>"Создано"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <Show when=move || !items.get().is_empty()>
                    <For
                        each=move || items.get()
                        // Whole item as key: an edited row must re-render after reload
                        key=|item| item.clone()
                        children=|item| view! { <ItemRow item=item /> }
                    />
                </Show>
                <Show when=move || items.get().is_empty()>
                    <tr class="empty-row">
                        <td colspan="7">"Нет записей"</td>
                    </tr>
                </Show>
            </tbody>
        </table>
    }
}
