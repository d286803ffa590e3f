//! Inventory Context
//!
//! Store and controller shared with child components via the Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpItemApi;
use crate::manager::InventoryController;
use crate::store::InventoryStore;

pub type HttpController = InventoryController<HttpItemApi, InventoryStore>;

#[derive(Clone, Copy)]
pub struct InventoryContext {
    pub store: InventoryStore,
    controller: StoredValue<HttpController>,
    /// Alert auto-dismiss delay in milliseconds
    pub alert_dismiss_ms: u32,
}

impl InventoryContext {
    pub fn new(store: InventoryStore, controller: HttpController, alert_dismiss_ms: u32) -> Self {
        Self {
            store,
            controller: StoredValue::new(controller),
            alert_dismiss_ms,
        }
    }

    pub fn controller(&self) -> HttpController {
        self.controller.get_value()
    }

    /// Run a controller operation on the local task queue
    pub fn run<F, Fut>(&self, op: F)
    where
        F: FnOnce(HttpController) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(op(self.controller()));
    }
}

pub fn use_inventory() -> InventoryContext {
    expect_context::<InventoryContext>()
}
