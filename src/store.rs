//! Inventory State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every state
//! transition lives here as a plain synchronous method so it can be driven
//! both by the reactive store and by tests.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiResult;
use crate::form::{FormErrors, FormField, ItemForm};
use crate::models::{Category, Item, ItemDraft, ItemId};

pub const LOAD_FAILED: &str = "Failed to load items";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "alert alert-success",
            Severity::Error => "alert alert-error",
        }
    }
}

/// Transient outcome banner
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    /// Sequence number; a dismissal timer only clears the alert it was started for
    pub seq: u64,
    pub severity: Severity,
    pub message: String,
}

/// Form mode derived from the edit target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ItemId),
}

/// A validated submission waiting to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub target: Option<ItemId>,
    pub draft: ItemDraft,
}

/// Inventory manager state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct InventoryState {
    /// Items from the last successful list fetch, in backend order
    pub items: Vec<Item>,
    pub form: ItemForm,
    pub form_errors: FormErrors,
    /// Some = edit mode
    pub edit_target: Option<ItemId>,
    pub alert: Option<Alert>,
    alert_seq: u64,
    pub search_term: String,
    /// None = all categories
    pub category_filter: Option<Category>,
    /// A create/update request is in flight
    pub submitting: bool,
}

impl InventoryState {
    pub fn mode(&self) -> FormMode {
        match &self.edit_target {
            Some(id) => FormMode::Edit(id.clone()),
            None => FormMode::Create,
        }
    }

    pub fn show_alert(&mut self, severity: Severity, message: impl Into<String>) -> u64 {
        self.alert_seq += 1;
        self.alert = Some(Alert { seq: self.alert_seq, severity, message: message.into() });
        self.alert_seq
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Timer-driven dismissal; ignored if a newer alert replaced `seq`
    pub fn expire_alert(&mut self, seq: u64) {
        if self.alert.as_ref().is_some_and(|a| a.seq == seq) {
            self.alert = None;
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        self.form.set(field, value);
        self.form_errors.clear(field);
    }

    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
    }

    /// Empty or unknown values clear the filter
    pub fn set_category_filter(&mut self, value: &str) {
        self.category_filter = Category::parse(value);
    }

    /// Back to an empty form in create mode
    pub fn cancel_edit(&mut self) {
        self.form = ItemForm::default();
        self.form_errors = FormErrors::default();
        self.edit_target = None;
    }

    pub fn apply_list(&mut self, result: ApiResult<Vec<Item>>) {
        match result {
            Ok(items) => {
                log::info!("loaded {} items", items.len());
                self.items = items;
            }
            Err(err) => {
                log::error!("failed to load items: {}", err);
                self.show_alert(Severity::Error, LOAD_FAILED);
            }
        }
    }

    /// Validate the form and mark a submission in flight.
    ///
    /// Returns `None` when a submission is already pending or the form is
    /// invalid; in the latter case field errors are recorded.
    pub fn prepare_submit(&mut self) -> Option<Submission> {
        if self.submitting {
            log::warn!("submit ignored: previous request still in flight");
            return None;
        }
        match self.form.validate() {
            Ok(draft) => {
                self.form_errors = FormErrors::default();
                self.submitting = true;
                Some(Submission { target: self.edit_target.clone(), draft })
            }
            Err(errors) => {
                self.form_errors = errors;
                None
            }
        }
    }

    /// Record the outcome of a submission; `true` means the list must be reloaded
    pub fn finish_submit(&mut self, submission: &Submission, result: ApiResult<()>) -> bool {
        self.submitting = false;
        match result {
            Ok(()) => {
                let message = if submission.target.is_some() { "Item updated!" } else { "Item added!" };
                self.show_alert(Severity::Success, message);
                self.cancel_edit();
                true
            }
            Err(err) => {
                log::error!("failed to save item: {}", err);
                self.show_alert(Severity::Error, format!("Failed to save item: {}", err.detail()));
                false
            }
        }
    }

    pub fn apply_edit(&mut self, id: ItemId, result: ApiResult<Item>) {
        match result {
            Ok(item) => {
                self.form = ItemForm::from_item(&item);
                self.form_errors = FormErrors::default();
                self.edit_target = Some(id);
            }
            Err(err) => {
                log::error!("failed to load item {} for edit: {}", id, err);
                self.show_alert(Severity::Error, format!("Failed to load item: {}", err.reason()));
            }
        }
    }

    /// Record the outcome of a delete; `true` means the list must be reloaded
    pub fn finish_remove(&mut self, id: &ItemId, result: ApiResult<()>) -> bool {
        match result {
            Ok(()) => {
                self.show_alert(Severity::Success, "Item deleted!");
                true
            }
            Err(err) => {
                log::error!("failed to delete item {}: {}", id, err);
                self.show_alert(Severity::Error, format!("Failed to delete item: {}", err.reason()));
                false
            }
        }
    }
}

/// Type alias for the store
pub type InventoryStore = Store<InventoryState>;

/// Mutable access to inventory state in short synchronous sections.
///
/// Implementations must never be held across an await point.
pub trait StateHandle: Clone + 'static {
    /// Run `f` against the state; `None` if the state is gone
    fn apply<R>(&self, f: impl FnOnce(&mut InventoryState) -> R) -> Option<R>;
}

impl StateHandle for InventoryStore {
    fn apply<R>(&self, f: impl FnOnce(&mut InventoryState) -> R) -> Option<R> {
        self.try_update(f)
    }
}
