//! UI Components
//!
//! Leptos components of the finance tracker.

mod analytics_panel;
mod bar_chart;
mod edit_item_row;
mod filter_bar;
mod item_fields;
mod item_table;
mod new_item_form;
mod sort_selector;
mod type_selector;

pub use analytics_panel::AnalyticsPanel;
pub use bar_chart::BarChart;
pub use edit_item_row::EditItemRow;
pub use filter_bar::FilterBar;
pub use item_fields::ItemFields;
pub use item_table::ItemTable;
pub use new_item_form::NewItemForm;
pub use sort_selector::SortSelector;
pub use type_selector::TypeSelector;
