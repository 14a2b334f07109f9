//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The table is
//! always derived from `items` and `filter`; nothing is patched in place.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::ItemFilter;
use crate::models::{Aggregated, Item, SortField};

/// Date range used for analytics and its CSV export
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

impl DateRange {
    pub fn from_opt(&self) -> Option<&str> {
        Some(self.from.trim()).filter(|s| !s.is_empty())
    }

    pub fn to_opt(&self) -> Option<&str> {
        Some(self.to.trim()).filter(|s| !s.is_empty())
    }

    /// Both bounds set and out of order
    pub fn is_inverted(&self) -> bool {
        match (self.from_opt(), self.to_opt()) {
            (Some(from), Some(to)) => match (crate::filter::parse_bound(from), crate::filter::parse_bound(to)) {
                (Some(f), Some(t)) => f > t,
                _ => false,
            },
            _ => false,
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last list fetched from the server, in server order
    pub items: Vec<Item>,
    /// Client-side filter over `items`
    pub filter: ItemFilter,
    /// Server-side sort, sent as repeated `sort_by`
    pub sort: Vec<SortField>,
    /// Analytics range inputs
    pub range: DateRange,
    /// Last analytics result; `None` hides the panel
    pub analytics: Option<Aggregated>,
    /// Item currently open in the edit row
    pub editing: Option<u32>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Table rows: the last fetched list through the current filter
pub fn visible_items(store: AppStore) -> Vec<Item> {
    let items = store.items().get();
    store.filter().with(|f| f.apply(&items))
}

/// Add `field` to the sort order, or remove it if already selected
pub fn toggle_sort(sort: &mut Vec<SortField>, field: SortField) {
    if let Some(pos) = sort.iter().position(|f| *f == field) {
        sort.remove(pos);
    } else {
        sort.push(field);
    }
}
