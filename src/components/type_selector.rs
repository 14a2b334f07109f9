//! Type Selector Component
//!
//! Reusable item type filter buttons ("all" plus each type).

use leptos::prelude::*;

use crate::models::ItemType;

/// Filter options, `None` = all types
const TYPE_OPTIONS: &[(Option<ItemType>, &str)] = &[
    (None, "Все"),
    (Some(ItemType::Income), "Доход"),
    (Some(ItemType::Expense), "Расход"),
];

/// Type selector buttons for the item filter
#[component]
pub fn TypeSelector(
    #[prop(into)] current_type: Signal<Option<ItemType>>,
    on_change: impl Fn(Option<ItemType>) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="type-selector">
            {TYPE_OPTIONS.iter().map(|(value, label)| {
                let value = *value;
                let is_selected = move || current_type.get() == value;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "type-btn active" } else { "type-btn" }
                        on:click=move |_| on_change(value)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
