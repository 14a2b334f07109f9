//! Item Form Validation
//!
//! Raw input values for the add and edit forms, validated field by field
//! into request bodies.

use chrono::NaiveDate;

use crate::models::{Item, ItemPatch, ItemType, NewItem, DATE_FORMAT};

/// Current text of every form field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub item_type: String,
    pub amount: String,
    pub date: String,
    pub category: String,
}

/// Per-field error messages; `None` means the field is valid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub item_type: Option<&'static str>,
    pub amount: Option<&'static str>,
    pub date: Option<&'static str>,
    pub category: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.item_type.is_none() && self.amount.is_none() && self.date.is_none() && self.category.is_none()
    }
}

impl ItemForm {
    /// Form pre-filled with an existing item's values
    pub fn from_item(item: &Item) -> Self {
        Self {
            item_type: item.item_type.as_str().to_string(),
            amount: item.amount.to_string(),
            date: item.day_str().to_string(),
            category: item.category.clone(),
        }
    }

    pub fn validate(&self) -> Result<NewItem, FormErrors> {
        let item_type = ItemType::parse(&self.item_type);
        let amount = self.amount.trim().parse::<i64>().ok().filter(|a| *a > 0);
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok();
        let category = self.category.trim();

        let errors = FormErrors {
            item_type: item_type.is_none().then_some("Выберите тип"),
            amount: amount.is_none().then_some("Сумма должна быть положительным целым числом"),
            date: date.is_none().then_some("Дата в формате ГГГГ-ММ-ДД"),
            category: category.is_empty().then_some("Укажите категорию"),
        };

        match (item_type, amount, date) {
            (Some(item_type), Some(amount), Some(date)) if errors.is_empty() => Ok(NewItem {
                item_type,
                amount,
                date: date.format(DATE_FORMAT).to_string(),
                category: category.to_string(),
            }),
            _ => Err(errors),
        }
    }

    /// Validate, then keep only the fields that differ from `original`.
    pub fn patch_for(&self, original: &Item) -> Result<ItemPatch, FormErrors> {
        let new = self.validate()?;
        Ok(ItemPatch {
            item_type: (new.item_type != original.item_type).then_some(new.item_type),
            amount: (new.amount != original.amount).then_some(new.amount),
            date: (new.date != original.day_str()).then(|| new.date.clone()),
            category: (new.category != original.category).then(|| new.category.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salary() -> Item {
        Item {
            id: 1,
            item_type: ItemType::Income,
            amount: 100,
            date: "2024-01-01".into(),
            category: "Salary".into(),
            created_at: None,
        }
    }

    fn filled() -> ItemForm {
        ItemForm {
            item_type: "расход".into(),
            amount: " 50 ".into(),
            date: "2024-01-02".into(),
            category: " Food ".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        let item = filled().validate().unwrap();
        assert_eq!(item.item_type, ItemType::Expense);
        assert_eq!(item.amount, 50);
        assert_eq!(item.category, "Food");
    }

    #[test]
    fn test_every_field_reports_its_error() {
        let errors = ItemForm::default().validate().unwrap_err();
        assert!(errors.item_type.is_some());
        assert!(errors.amount.is_some());
        assert!(errors.date.is_some());
        assert!(errors.category.is_some());
    }

    #[test]
    fn test_amount_must_be_positive_integer() {
        for bad in ["0", "-5", "12.5", "abc"] {
            let form = ItemForm { amount: bad.into(), ..filled() };
            let errors = form.validate().unwrap_err();
            assert!(errors.amount.is_some(), "{bad} accepted");
            assert!(errors.date.is_none());
        }
    }

    #[test]
    fn test_date_must_be_a_real_day() {
        let form = ItemForm { date: "2024-02-30".into(), ..filled() };
        assert!(form.validate().unwrap_err().date.is_some());
    }

    #[test]
    fn test_prefilled_form_yields_empty_patch() {
        let item = salary();
        let form = ItemForm::from_item(&item);
        assert_eq!(form.item_type, "доход");
        assert!(form.patch_for(&item).unwrap().is_empty());
    }

    #[test]
    fn test_patch_contains_only_changes() {
        let item = salary();
        let form = ItemForm {
            amount: "120".into(),
            category: "Bonus".into(),
            ..ItemForm::from_item(&item)
        };
        let patch = form.patch_for(&item).unwrap();
        assert_eq!(patch.amount, Some(120));
        assert_eq!(patch.category.as_deref(), Some("Bonus"));
        assert_eq!(patch.item_type, None);
        assert_eq!(patch.date, None);
    }

    #[test]
    fn test_invalid_edit_is_rejected_whole() {
        let item = salary();
        let form = ItemForm {
            category: "".into(),
            ..ItemForm::from_item(&item)
        };
        assert!(form.patch_for(&item).is_err());
    }
}
