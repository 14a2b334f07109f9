//! Item Commands
//!
//! CRUD and CSV export for ledger items.

use ui_shared::{encode_segment, save_blob, ApiError, Query};

use super::client;
use crate::models::{Item, ItemPatch, NewItem, SortField};

/// Download name for the items export
pub const ITEMS_CSV_NAME: &str = "filtered_data.csv";

fn sort_query(sort: &[SortField]) -> Query {
    Query::new().push_all("sort_by", sort.iter().map(SortField::as_str))
}

fn item_path(id: u32) -> String {
    format!("/items/{}", encode_segment(&id.to_string()))
}

pub async fn list_items(sort: &[SortField]) -> Result<Vec<Item>, ApiError> {
    let items: Option<Vec<Item>> = client().get_json(&sort_query(sort).apply("/items")).await?;
    Ok(items.unwrap_or_default())
}

pub async fn create_item(item: &NewItem) -> Result<(), ApiError> {
    client().send_json_unit("POST", "/items", item).await
}

pub async fn update_item(id: u32, patch: &ItemPatch) -> Result<(), ApiError> {
    client().send_json_unit("PUT", &item_path(id), patch).await
}

pub async fn delete_item(id: u32) -> Result<(), ApiError> {
    client().delete(&item_path(id)).await
}

/// Fetch the server-side CSV for the current sort and save it
pub async fn export_items_csv(sort: &[SortField]) -> Result<(), ApiError> {
    let blob = client().get_blob(&sort_query(sort).apply("/items/csv")).await?;
    save_blob(&blob, ITEMS_CSV_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_query_repeats_field() {
        let q = sort_query(&[SortField::Date, SortField::CreatedAt]);
        assert_eq!(q.apply("/items"), "/items?sort_by=date&sort_by=created_at");
        assert_eq!(sort_query(&[]).apply("/items/csv"), "/items/csv");
    }

    #[test]
    fn test_item_path() {
        assert_eq!(item_path(42), "/items/42");
    }
}
