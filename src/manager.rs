//! Inventory Manager Operations
//!
//! Async orchestration of backend calls around the synchronous state
//! transitions in `store`. Mutations always complete before the
//! reconciliation fetch is issued.

use std::sync::Arc;

use crate::api::ItemApi;
use crate::models::ItemId;
use crate::store::StateHandle;

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this item?";

/// Interactive yes/no confirmation
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

/// Browser `window.confirm` dialog
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowConfirm;

impl ConfirmPrompt for WindowConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Drives the item API and applies results to inventory state
pub struct InventoryController<A, S> {
    api: Arc<A>,
    state: S,
}

impl<A, S: Clone> Clone for InventoryController<A, S> {
    fn clone(&self) -> Self {
        Self { api: Arc::clone(&self.api), state: self.state.clone() }
    }
}

impl<A: ItemApi + 'static, S: StateHandle> InventoryController<A, S> {
    pub fn new(api: A, state: S) -> Self {
        Self { api: Arc::new(api), state }
    }

    /// Replace the cached list with the backend's collection
    pub async fn load_all(&self) {
        let result = self.api.list_items().await;
        self.state.apply(|s| s.apply_list(result));
    }

    /// Create or update from the current form, then reconcile
    pub async fn submit(&self) {
        let Some(submission) = self.state.apply(|s| s.prepare_submit()).flatten() else {
            return;
        };

        let result = match &submission.target {
            Some(id) => self.api.update_item(id, &submission.draft).await,
            None => self.api.create_item(&submission.draft).await,
        };

        let reload = self.state.apply(|s| s.finish_submit(&submission, result)).unwrap_or(false);
        if reload {
            self.load_all().await;
        }
    }

    /// Fetch one item and load it into the form in edit mode
    pub async fn begin_edit(&self, id: ItemId) {
        let result = self.api.get_item(&id).await;
        self.state.apply(|s| s.apply_edit(id, result));
    }

    /// Delete after confirmation, then reconcile
    pub async fn remove(&self, id: ItemId, prompt: &impl ConfirmPrompt) {
        if !prompt.confirm(CONFIRM_DELETE) {
            log::debug!("delete of item {} declined", id);
            return;
        }

        let result = self.api.delete_item(&id).await;
        let reload = self.state.apply(|s| s.finish_remove(&id, result)).unwrap_or(false);
        if reload {
            self.load_all().await;
        }
    }

    pub fn cancel_edit(&self) {
        self.state.apply(|s| s.cancel_edit());
    }
}
