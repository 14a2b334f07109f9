//! Item Fields Component
//!
//! Type/amount/date/category inputs bound to an [`ItemForm`], with the
//! field's validation message under each input.

use leptos::prelude::*;

use crate::form::{FormErrors, ItemForm};
use crate::models::ITEM_TYPES;

fn field_error(errors: RwSignal<FormErrors>, pick: fn(&FormErrors) -> Option<&'static str>) -> impl IntoView {
    move || errors.with(pick).map(|message| view! { <span class="field-error">{message}</span> })
}

#[component]
pub fn ItemFields(form: RwSignal<ItemForm>, errors: RwSignal<FormErrors>) -> impl IntoView {
    view! {
        <div class="item-fields">
            <label class="field">
                <select
                    prop:value=move || form.with(|f| f.item_type.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.item_type = value);
                    }
                >
                    <option value="">"Тип"</option>
                    {ITEM_TYPES.iter().map(|t| view! {
                        <option value=t.as_str()>{t.label()}</option>
                    }).collect_view()}
                </select>
                {field_error(errors, |e| e.item_type)}
            </label>

            <label class="field">
                <input
                    type="number"
                    min="1"
                    step="1"
                    placeholder="Сумма"
                    prop:value=move || form.with(|f| f.amount.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.amount = value);
                    }
                />
                {field_error(errors, |e| e.amount)}
            </label>

            <label class="field">
                <input
                    type="date"
                    prop:value=move || form.with(|f| f.date.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.date = value);
                    }
                />
                {field_error(errors, |e| e.date)}
            </label>

            <label class="field">
                <input
                    type="text"
                    placeholder="Категория"
                    prop:value=move || form.with(|f| f.category.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.category = value);
                    }
                />
                {field_error(errors, |e| e.category)}
            </label>
        </div>
    }
}
