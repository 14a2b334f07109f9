//! New Item Form Component
//!
//! Form for creating new items; the list reloads after a successful POST.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::ItemFields;
use crate::context::use_app_context;
use crate::form::{FormErrors, ItemForm};

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let form = RwSignal::new(ItemForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let (saving, set_saving) = signal(false);

    let create_item = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let new_item = match form.get().validate() {
            Ok(item) => item,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::default());
        set_saving.set(true);

        spawn_local(async move {
            match commands::create_item(&new_item).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[ITEMS] created {:?}", new_item).into());
                    form.set(ItemForm::default());
                    ctx.success("Запись добавлена");
                    ctx.reload();
                }
                Err(e) => ctx.api_error("Ошибка при добавлении", &e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <h2>"Новая запись"</h2>
            <ItemFields form=form errors=errors />
            <button type="submit" disabled=move || saving.get()>"Добавить"</button>
        </form>
    }
}
