//! Item Form State
//!
//! Raw editable form fields and their parse-and-validate step.

use std::num::IntErrorKind;
use std::str::FromStr;

use thiserror::Error;

use crate::models::{Category, Item, ItemDraft};

/// Form field identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Category,
    Quantity,
    Price,
    Description,
}

/// Validation failure for a single field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    MissingName,
    #[error("Choose a category")]
    MissingCategory,
    #[error("{0} must be a whole number of 0 or more")]
    NotAWholeNumber(&'static str),
    #[error("{0} is too large")]
    TooLarge(&'static str),
}

/// All field errors found in one validation pass
#[derive(Debug, Clone, Default, PartialEq, Error)]
#[error("{} invalid field(s)", .errors.len())]
pub struct FormErrors {
    errors: Vec<(FormField, FieldError)>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.errors.iter().find(|(f, _)| *f == field).map(|(_, e)| e)
    }

    pub fn clear(&mut self, field: FormField) {
        self.errors.retain(|(f, _)| *f != field);
    }

    fn push(&mut self, field: FormField, error: FieldError) {
        self.errors.push((field, error));
    }
}

/// Draft item as typed by the user, before coercion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
    pub description: String,
}

impl ItemForm {
    /// Populate the form from a fetched item (edit mode)
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.as_str().to_string(),
            quantity: item.quantity.to_string(),
            price: item.price.to_string(),
            description: item.description.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Category => &self.category,
            FormField::Quantity => &self.quantity,
            FormField::Price => &self.price,
            FormField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Category => self.category = value,
            FormField::Quantity => self.quantity = value,
            FormField::Price => self.price = value,
            FormField::Description => self.description = value,
        }
    }

    /// Parse every field, collecting all errors rather than stopping at the first
    pub fn validate(&self) -> Result<ItemDraft, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FormField::Name, FieldError::MissingName);
        }

        let category = Category::parse(self.category.trim());
        if category.is_none() {
            errors.push(FormField::Category, FieldError::MissingCategory);
        }

        let quantity = parse_whole::<u32>(&self.quantity, "Quantity")
            .map_err(|e| errors.push(FormField::Quantity, e))
            .ok();
        let price = parse_whole::<u64>(&self.price, "Price")
            .map_err(|e| errors.push(FormField::Price, e))
            .ok();

        match (category, quantity, price) {
            (Some(category), Some(quantity), Some(price)) if errors.is_empty() => Ok(ItemDraft {
                name: name.to_string(),
                category,
                quantity,
                price,
                description: Some(self.description.trim())
                    .filter(|d| !d.is_empty())
                    .map(str::to_string),
            }),
            _ => Err(errors),
        }
    }
}

fn parse_whole<T>(raw: &str, label: &'static str) -> Result<T, FieldError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    raw.trim().parse::<T>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => FieldError::TooLarge(label),
        _ => FieldError::NotAWholeNumber(label),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;

    fn filled() -> ItemForm {
        ItemForm {
            name: "  Pen ".to_string(),
            category: "Stationery".to_string(),
            quantity: "3".to_string(),
            price: " 1000".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_validate_trims_and_coerces() {
        let draft = filled().validate().expect("valid form");
        assert_eq!(draft.name, "Pen");
        assert_eq!(draft.category, Category::Stationery);
        assert_eq!(draft.quantity, 3);
        assert_eq!(draft.price, 1000);
        assert_eq!(draft.description, None);
    }

    #[test]
    fn test_blank_description_is_left_off_the_wire() {
        let mut form = filled();
        form.description = "   ".to_string();
        let draft = form.validate().expect("valid form");
        assert_eq!(draft.description, None);

        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("description").is_none(), "unexpected description in {}", json);

        form.description = "  blue ink ".to_string();
        assert_eq!(form.validate().unwrap().description.as_deref(), Some("blue ink"));
    }

    #[test]
    fn test_validate_rejects_non_numeric_and_negative() {
        let mut form = filled();
        form.quantity = "abc".to_string();
        form.price = "-5".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::Quantity), Some(&FieldError::NotAWholeNumber("Quantity")));
        assert_eq!(errors.get(FormField::Price), Some(&FieldError::NotAWholeNumber("Price")));
        assert_eq!(errors.get(FormField::Name), None);
    }

    #[test]
    fn test_validate_collects_every_error() {
        let errors = ItemForm::default().validate().unwrap_err();
        assert_eq!(errors.get(FormField::Name), Some(&FieldError::MissingName));
        assert_eq!(errors.get(FormField::Category), Some(&FieldError::MissingCategory));
        assert!(errors.get(FormField::Quantity).is_some());
        assert!(errors.get(FormField::Price).is_some());
        assert_eq!(errors.get(FormField::Description), None);
    }

    #[test]
    fn test_validate_reports_overflow() {
        let mut form = filled();
        form.quantity = "99999999999".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::Quantity), Some(&FieldError::TooLarge("Quantity")));
        assert_eq!(errors.get(FormField::Quantity).unwrap().to_string(), "Quantity is too large");
    }

    #[test]
    fn test_from_item_defaults_missing_description() {
        let item = Item {
            id: ItemId::new("7"),
            name: "Shirt".to_string(),
            category: Category::Clothing,
            quantity: 12,
            price: 75000,
            description: None,
        };
        let form = ItemForm::from_item(&item);
        assert_eq!(form.category, "Clothing");
        assert_eq!(form.quantity, "12");
        assert_eq!(form.price, "75000");
        assert_eq!(form.description, "");
        assert_eq!(form.validate().unwrap().name, "Shirt");
    }

    #[test]
    fn test_clear_removes_only_that_field() {
        let mut errors = ItemForm::default().validate().unwrap_err();
        errors.clear(FormField::Name);
        assert_eq!(errors.get(FormField::Name), None);
        assert!(errors.get(FormField::Category).is_some());
    }
}
