//! Inventory Manager Component
//!
//! Owns the inventory store and wires the form, filters and table to it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpItemApi;
use crate::components::{AlertBanner, FilterBar, ItemFormPanel, ItemTable};
use crate::config::ClientConfig;
use crate::context::InventoryContext;
use crate::manager::InventoryController;
use crate::store::InventoryState;

#[component]
pub fn InventoryManager(config: ClientConfig) -> impl IntoView {
    let store = Store::new(InventoryState::default());
    let controller = InventoryController::new(HttpItemApi::new(config.api_base), store);
    let ctx = InventoryContext::new(store, controller, config.alert_dismiss_ms);
    provide_context(ctx);

    // Load items on mount
    Effect::new(move |_| {
        ctx.run(|controller| async move { controller.load_all().await });
    });

    view! {
        <div class="inventory-container">
            <AlertBanner />

            <div class="card">
                <h2>"Add / Edit Item"</h2>
                <ItemFormPanel />
            </div>

            <div class="card">
                <h2>"Item List"</h2>
                <FilterBar />
                <ItemTable />
            </div>
        </div>
    }
}
