//! Table Utilities
//!
//! Pure helpers deriving the visible table from cached items and filters.

use crate::models::{Category, Item, ItemId, StockLevel};

pub const EMPTY_PLACEHOLDER: &str = "No items found";

/// Items matching both the search term and the category filter.
///
/// Search is a case-insensitive substring match on name or description;
/// an empty term or `None` category disables that predicate. Order is kept.
pub fn visible_items<'a>(items: &'a [Item], search_term: &str, category: Option<Category>) -> Vec<&'a Item> {
    let needle = search_term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            needle.is_empty()
                || item.name.to_lowercase().contains(&needle)
                || item
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .filter(|item| category.map_or(true, |c| item.category == c))
        .collect()
}

/// Group digits in threes with a fixed `,` separator and no currency
/// prefix: 1234567 -> "1,234,567". Output does not depend on browser locale.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemRow {
    pub id: ItemId,
    pub name: String,
    pub category: &'static str,
    pub quantity: u32,
    pub stock: StockLevel,
    pub price: String,
    pub description: String,
}

impl ItemRow {
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            category: item.category.as_str(),
            quantity: item.quantity,
            stock: StockLevel::classify(item.quantity),
            price: format_thousands(item.price),
            description: item
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or("-")
                .to_string(),
        }
    }
}

/// Table body: either the placeholder row or the visible rows
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Empty,
    Rows(Vec<ItemRow>),
}

impl TableBody {
    pub fn is_empty(&self) -> bool {
        matches!(self, TableBody::Empty)
    }

    pub fn rows(&self) -> &[ItemRow] {
        match self {
            TableBody::Empty => &[],
            TableBody::Rows(rows) => rows,
        }
    }
}

pub fn table_body(items: &[Item], search_term: &str, category: Option<Category>) -> TableBody {
    let rows: Vec<ItemRow> = visible_items(items, search_term, category)
        .into_iter()
        .map(ItemRow::from_item)
        .collect();
    if rows.is_empty() {
        TableBody::Empty
    } else {
        TableBody::Rows(rows)
    }
}
