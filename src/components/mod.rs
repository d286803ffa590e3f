//! UI Components
//!
//! Leptos components making up the inventory manager view.

mod alert_banner;
mod category_select;
mod filter_bar;
mod inventory_manager;
mod item_form;
mod item_table;

pub use alert_banner::AlertBanner;
pub use category_select::CategorySelect;
pub use filter_bar::FilterBar;
pub use inventory_manager::InventoryManager;
pub use item_form::ItemFormPanel;
pub use item_table::ItemTable;
