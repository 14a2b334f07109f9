//! Edit Item Row Component
//!
//! Inline edit form replacing a table row. Pre-filled with the item's
//! values; only changed fields are sent, all at once.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::ItemFields;
use crate::context::use_app_context;
use crate::form::{FormErrors, ItemForm};
use crate::models::Item;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn EditItemRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = item.id;
    let form = RwSignal::new(ItemForm::from_item(&item));
    let errors = RwSignal::new(FormErrors::default());
    let (saving, set_saving) = signal(false);

    let save = move |_| {
        let patch = match form.get().patch_for(&item) {
            Ok(patch) => patch,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        if patch.is_empty() {
            store.editing().set(None);
            return;
        }
        set_saving.set(true);

        spawn_local(async move {
            match commands::update_item(id, &patch).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[ITEMS] updated #{} with {:?}", id, patch).into());
                    store.editing().set(None);
                    ctx.success(format!("Запись #{} обновлена", id));
                    ctx.reload();
                }
                Err(e) => ctx.api_error("Ошибка при обновлении", &e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <tr class="edit-row">
            <td>{id}</td>
            <td colspan="6">
                <div class="edit-form">
                    <ItemFields form=form errors=errors />
                    <button type="button" class="confirm-btn" disabled=move || saving.get() on:click=save>
                        "Сохранить"
                    </button>
                    <button type="button" class="cancel-btn" on:click=move |_| store.editing().set(None)>
                        "Отмена"
                    </button>
                </div>
            </td>
        </tr>
    }
}
