//! Item Form Component
//!
//! Create/update form. Field values are kept as raw text in the store and
//! only coerced by validation on submit.

use leptos::prelude::*;

use crate::components::CategorySelect;
use crate::context::use_inventory;
use crate::form::FormField;
use crate::store::{InventoryStateStoreFields, InventoryStore};

fn input_id(field: FormField) -> &'static str {
    match field {
        FormField::Name => "item-name",
        FormField::Category => "item-category",
        FormField::Quantity => "item-quantity",
        FormField::Price => "item-price",
        FormField::Description => "item-description",
    }
}

fn field_error(store: InventoryStore, field: FormField) -> Option<String> {
    store.form_errors().with(|errors| errors.get(field).map(|e| e.to_string()))
}

/// Labelled text/number input bound to one form field
#[component]
fn FormInput(
    field: FormField,
    #[prop(into)] label: String,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let store = use_inventory().store;
    let numeric = input_type == "number";

    view! {
        <div class="form-group">
            <label for=input_id(field)>{label}</label>
            <input
                type=input_type
                id=input_id(field)
                min=numeric.then_some("0")
                step=numeric.then_some("1")
                prop:value=move || store.form().with(|f| f.get(field).to_string())
                on:input=move |ev| store.update(|s| s.set_field(field, event_target_value(&ev)))
            />
            {move || field_error(store, field).map(|msg| view! { <span class="field-error">{msg}</span> })}
        </div>
    }
}

/// Form for adding a new item or updating the one being edited
#[component]
pub fn ItemFormPanel() -> impl IntoView {
    let ctx = use_inventory();
    let store = ctx.store;
    let editing = move || store.edit_target().with(Option::is_some);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.run(|controller| async move { controller.submit().await });
    };

    let category = Signal::derive(move || store.form().with(|f| f.category.clone()));

    view! {
        <form class="item-form" novalidate=true on:submit=on_submit>
            <FormInput field=FormField::Name label="Item name" />

            <div class="form-group">
                <label for=input_id(FormField::Category)>"Category"</label>
                <CategorySelect
                    id=input_id(FormField::Category)
                    value=category
                    on_change=move |value: String| store.update(|s| s.set_field(FormField::Category, value))
                    placeholder="Select category"
                />
                {move || field_error(store, FormField::Category).map(|msg| view! { <span class="field-error">{msg}</span> })}
            </div>

            <FormInput field=FormField::Quantity label="Quantity" input_type="number" />
            <FormInput field=FormField::Price label="Price" input_type="number" />
            <FormInput field=FormField::Description label="Description" />

            <button type="submit" class="btn btn-primary" disabled=move || store.submitting().get()>
                {move || if editing() { "Update Item" } else { "Add Item" }}
            </button>
            <Show when=editing>
                <button type="button" class="btn btn-danger" on:click=move |_| ctx.controller().cancel_edit()>
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}
