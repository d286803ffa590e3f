//! Inventory Frontend App
//!
//! Page shell: static header plus the inventory manager.

use leptos::prelude::*;

use crate::components::InventoryManager;
use crate::config::ClientConfig;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Inventory Manager"</h1>
                <p>"Track stock levels, prices and categories"</p>
            </header>
            <InventoryManager config=config />
        </div>
    }
}
