//! Client-side Item Filters
//!
//! Applied over the last fetched list; changing a filter never re-fetches.

use chrono::NaiveDate;

use crate::models::{Item, ItemType};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    /// Exact type match
    pub item_type: Option<ItemType>,
    /// Case-insensitive substring of the category
    pub category: String,
    /// Inclusive lower bound
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound
    pub to: Option<NaiveDate>,
}

impl ItemFilter {
    pub fn is_empty(&self) -> bool {
        self.item_type.is_none() && self.category.trim().is_empty() && self.from.is_none() && self.to.is_none()
    }

    pub fn matches(&self, item: &Item) -> bool {
        if let Some(t) = self.item_type {
            if item.item_type != t {
                return false;
            }
        }

        let needle = self.category.trim().to_lowercase();
        if !needle.is_empty() && !item.category.to_lowercase().contains(&needle) {
            return false;
        }

        if self.from.is_none() && self.to.is_none() {
            return true;
        }
        // With a bound set, an undated item cannot be placed in the range
        let Some(day) = item.day() else {
            return false;
        };
        self.from.map_or(true, |from| day >= from) && self.to.map_or(true, |to| day <= to)
    }

    /// Keep matching items, preserving server order
    pub fn apply(&self, items: &[Item]) -> Vec<Item> {
        items.iter().filter(|item| self.matches(item)).cloned().collect()
    }
}

/// Parse a date input value; blank or malformed input means "no bound".
pub fn parse_bound(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), crate::models::DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, item_type: ItemType, amount: i64, date: &str, category: &str) -> Item {
        Item {
            id,
            item_type,
            amount,
            date: date.to_string(),
            category: category.to_string(),
            created_at: None,
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            make_item(1, ItemType::Income, 100, "2024-01-01", "Salary"),
            make_item(2, ItemType::Expense, 50, "2024-01-02", "Food"),
        ]
    }

    fn ids(items: &[Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = ItemFilter::default();
        assert!(filter.is_empty());
        assert_eq!(ids(&filter.apply(&sample())), vec![1, 2]);
    }

    #[test]
    fn test_filter_by_type() {
        let filter = ItemFilter {
            item_type: Some(ItemType::Expense),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&sample())), vec![2]);
    }

    #[test]
    fn test_filter_by_category_case_insensitive() {
        let filter = ItemFilter {
            category: "sal".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&sample())), vec![1]);

        let filter = ItemFilter {
            category: "  FOO ".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&sample())), vec![2]);
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let day = |d: u32| NaiveDate::from_ymd_opt(2024, 1, d);
        let filter = ItemFilter {
            from: day(2),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&sample())), vec![2]);

        let filter = ItemFilter {
            to: day(1),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&sample())), vec![1]);

        let filter = ItemFilter {
            from: day(1),
            to: day(2),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&sample())), vec![1, 2]);
    }

    #[test]
    fn test_combined_filters() {
        let filter = ItemFilter {
            item_type: Some(ItemType::Income),
            category: "food".into(),
            ..Default::default()
        };
        assert!(filter.apply(&sample()).is_empty());
    }

    #[test]
    fn test_undated_item_excluded_only_when_bounded() {
        let items = vec![make_item(3, ItemType::Income, 10, "someday", "Gift")];
        assert_eq!(ids(&ItemFilter::default().apply(&items)), vec![3]);

        let filter = ItemFilter {
            from: parse_bound("2024-01-01"),
            ..Default::default()
        };
        assert!(filter.apply(&items).is_empty());
    }

    #[test]
    fn test_parse_bound() {
        assert_eq!(parse_bound("2024-03-05"), NaiveDate::from_ymd_opt(2024, 3, 5));
        assert_eq!(parse_bound(""), None);
        assert_eq!(parse_bound("2024-13-01"), None);
    }
}
