//! Frontend Models
//!
//! Data structures matching the items/analytics API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar day format used on the wire (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Item type; the server stores and validates the Russian values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    #[serde(rename = "доход", alias = "income")]
    Income,
    #[serde(rename = "расход", alias = "expense")]
    Expense,
}

/// Item type options
pub const ITEM_TYPES: &[ItemType] = &[ItemType::Income, ItemType::Expense];

impl ItemType {
    /// Wire value, as sent in `type`
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Income => "доход",
            ItemType::Expense => "расход",
        }
    }

    /// ASCII name for CSS classes
    pub fn css_name(&self) -> &'static str {
        match self {
            ItemType::Income => "income",
            ItemType::Expense => "expense",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Income => "Доход",
            ItemType::Expense => "Расход",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "income" | "доход" => Some(ItemType::Income),
            "expense" | "расход" => Some(ItemType::Expense),
            _ => None,
        }
    }
}

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub amount: i64,
    pub date: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Item {
    /// The `YYYY-MM-DD` part of `date`; the server may append a time.
    pub fn day_str(&self) -> &str {
        self.date.get(..10).unwrap_or(&self.date)
    }

    /// Server timestamp for the `Создано` column, blank when absent
    pub fn created_label(&self) -> &str {
        self.created_at.as_deref().unwrap_or("")
    }

    pub fn day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.day_str(), DATE_FORMAT).ok()
    }
}

/// POST /items body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub amount: i64,
    pub date: String,
    pub category: String,
}

/// PUT /items/{id} body; absent fields stay unchanged on the server
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemPatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.item_type.is_none() && self.amount.is_none() && self.date.is_none() && self.category.is_none()
    }
}

/// Server-computed statistics over a date range
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Aggregated {
    pub sum: i64,
    #[serde(alias = "avarage")]
    pub average: f64,
    pub count: i64,
    pub median: f64,
    #[serde(alias = "percentile")]
    pub percentile_90: f64,
}

/// One row of GET /analytics; every row carries the same aggregate
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalyticsRow {
    #[serde(default)]
    pub aggregated_data: Aggregated,
}

/// Fields the server accepts in `sort_by`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    Type,
    Amount,
    Date,
    Category,
    CreatedAt,
}

pub const SORT_FIELDS: &[SortField] = &[
    SortField::Date,
    SortField::Amount,
    SortField::Type,
    SortField::Category,
    SortField::CreatedAt,
    SortField::Id,
];

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Type => "type",
            SortField::Amount => "amount",
            SortField::Date => "date",
            SortField::Category => "category",
            SortField::CreatedAt => "created_at",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Id => "ID",
            SortField::Type => "Тип",
            SortField::Amount => "Сумма",
            SortField::Date => "Дата",
            SortField::Category => "Категория",
            SortField::CreatedAt => "Создано",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_decodes_with_type_key() {
        let json = r#"{"id":1,"type":"income","amount":100,"date":"2024-01-01","category":"Salary","created_at":"2024-01-01T10:00:00Z"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_type, ItemType::Income);
        assert_eq!(item.amount, 100);
        assert_eq!(item.created_at.as_deref(), Some("2024-01-01T10:00:00Z"));
        assert_eq!(item.created_label(), "2024-01-01T10:00:00Z");
    }

    #[test]
    fn test_item_type_accepts_russian_values() {
        let json = r#"{"id":2,"type":"расход","amount":50,"date":"2024-01-02T00:00:00Z","category":"Food"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_type, ItemType::Expense);
        assert_eq!(item.day_str(), "2024-01-02");
        assert_eq!(item.day(), NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(item.created_label(), "");
        assert_eq!(ItemType::parse("Доход"), Some(ItemType::Income));
    }

    #[test]
    fn test_aggregated_accepts_server_spelling() {
        let json = r#"[{"id":1,"aggregated_data":{"sum":150,"avarage":75.5,"count":2,"median":75,"percentile":95.0}}]"#;
        let rows: Vec<AnalyticsRow> = serde_json::from_str(json).unwrap();
        let data = &rows[0].aggregated_data;
        assert_eq!(data.sum, 150);
        assert_eq!(data.average, 75.5);
        assert_eq!(data.median, 75.0);
        assert_eq!(data.percentile_90, 95.0);
    }

    #[test]
    fn test_patch_omits_unchanged_fields() {
        let patch = ItemPatch {
            amount: Some(70),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"amount":70}"#);
        assert!(ItemPatch::default().is_empty());
    }

    #[test]
    fn test_new_item_body() {
        let body = NewItem {
            item_type: ItemType::Expense,
            amount: 50,
            date: "2024-01-02".into(),
            category: "Food".into(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"type":"расход","amount":50,"date":"2024-01-02","category":"Food"})
        );
    }

    #[test]
    fn test_type_sent_as_server_value() {
        for item_type in ITEM_TYPES {
            let value = serde_json::to_value(item_type).unwrap();
            assert!(["доход", "расход"].contains(&value.as_str().unwrap()));
            assert_eq!(value.as_str(), Some(item_type.as_str()));
            assert_eq!(ItemType::parse(item_type.as_str()), Some(*item_type));
        }

        let patch = ItemPatch {
            item_type: Some(ItemType::Income),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"type":"доход"}"#);
    }
}
