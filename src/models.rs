//! Frontend Models
//!
//! Data structures matching the inventory backend's JSON contract.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters left unescaped when an id is placed in a URL path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Opaque backend-assigned identifier.
///
/// Backends differ on whether ids are JSON strings or numbers; both are
/// accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct ItemId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawId> for ItemId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => ItemId(text),
            RawId::Number(number) => ItemId(number.to_string()),
        }
    }
}

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        ItemId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id escaped for use as a single URL path segment
    pub fn path_segment(&self) -> String {
        utf8_percent_encode(&self.0, PATH_SEGMENT).to_string()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fixed set of item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Food,
    Clothing,
    Stationery,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Food,
        Category::Clothing,
        Category::Stationery,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Food => "Food",
            Category::Clothing => "Clothing",
            Category::Stationery => "Stationery",
            Category::Other => "Other",
        }
    }

    /// Parse a wire/form value; anything outside the set is `None`
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    pub quantity: u32,
    pub price: u64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Validated payload for create and update requests.
///
/// Only produced by `ItemForm::validate`, so every draft sent to the
/// backend already satisfies the item invariants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDraft {
    pub name: String,
    pub category: Category,
    pub quantity: u32,
    pub price: u64,
    /// Blank descriptions are left off the wire
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Stock level derived from quantity, used for row styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockLevel {
    Low,
    Medium,
    High,
}

impl StockLevel {
    pub fn classify(quantity: u32) -> Self {
        match quantity {
            0..=4 => StockLevel::Low,
            5..=19 => StockLevel::Medium,
            _ => StockLevel::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockLevel::Low => "low",
            StockLevel::Medium => "medium",
            StockLevel::High => "high",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StockLevel::Low => "stock-low",
            StockLevel::Medium => "stock-medium",
            StockLevel::High => "stock-high",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_level_boundaries() {
        assert_eq!(StockLevel::classify(0), StockLevel::Low);
        assert_eq!(StockLevel::classify(4), StockLevel::Low);
        assert_eq!(StockLevel::classify(5), StockLevel::Medium);
        assert_eq!(StockLevel::classify(19), StockLevel::Medium);
        assert_eq!(StockLevel::classify(20), StockLevel::High);
        assert_eq!(StockLevel::classify(u32::MAX), StockLevel::High);
        assert_eq!(StockLevel::Low.css_class(), "stock-low");
    }

    #[test]
    fn test_item_accepts_string_and_numeric_ids() {
        let from_text: Item = serde_json::from_str(
            r#"{"id":"a1","name":"Pen","category":"Stationery","quantity":3,"price":1000}"#,
        )
        .unwrap();
        assert_eq!(from_text.id, ItemId::new("a1"));
        assert_eq!(from_text.description, None);

        let from_number: Item = serde_json::from_str(
            r#"{"id":42,"name":"Rice","category":"Food","quantity":10,"price":15000,"description":null}"#,
        )
        .unwrap();
        assert_eq!(from_number.id.as_str(), "42");
        assert_eq!(from_number.category, Category::Food);
    }

    #[test]
    fn test_item_rejects_unknown_category() {
        let result: Result<Item, _> = serde_json::from_str(
            r#"{"id":1,"name":"Pen","category":"Alat Tulis","quantity":3,"price":1000}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_draft_uses_canonical_field_names() {
        let draft = ItemDraft {
            name: "Pen".to_string(),
            category: Category::Stationery,
            quantity: 3,
            price: 1000,
            description: None,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Pen",
                "category": "Stationery",
                "quantity": 3,
                "price": 1000
            })
        );
    }

    #[test]
    fn test_draft_sends_present_description() {
        let draft = ItemDraft {
            name: "Shirt".to_string(),
            category: Category::Clothing,
            quantity: 12,
            price: 75000,
            description: Some("cotton".to_string()),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["description"], "cotton");
    }

    #[test]
    fn test_path_segment_escapes_reserved_characters() {
        assert_eq!(ItemId::new("abc-123").path_segment(), "abc-123");
        assert_eq!(ItemId::new("a/b c").path_segment(), "a%2Fb%20c");
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("Clothing"), Some(Category::Clothing));
        assert_eq!(Category::parse("clothing"), None);
        assert_eq!(Category::parse(""), None);
    }
}
