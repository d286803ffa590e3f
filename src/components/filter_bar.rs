//! Filter Bar Component
//!
//! Free-text search plus category filter over the cached item list.

use leptos::prelude::*;

use crate::components::CategorySelect;
use crate::context::use_inventory;
use crate::store::InventoryStateStoreFields;

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_inventory().store;

    let category = Signal::derive(move || {
        store
            .category_filter()
            .get()
            .map(|c| c.as_str().to_string())
            .unwrap_or_default()
    });

    view! {
        <div class="search-container">
            <input
                type="text"
                placeholder="Search items..."
                prop:value=move || store.search_term().get()
                on:input=move |ev| store.update(|s| s.set_search_term(event_target_value(&ev)))
            />
            <CategorySelect
                value=category
                on_change=move |value: String| store.update(|s| s.set_category_filter(&value))
                placeholder="All categories"
            />
        </div>
    }
}
