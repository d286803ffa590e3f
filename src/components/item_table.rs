//! Item Table Component
//!
//! Filtered item list with per-row edit and delete actions.

use leptos::prelude::*;

use crate::context::use_inventory;
use crate::filter::{table_body, ItemRow, TableBody, EMPTY_PLACEHOLDER};
use crate::manager::WindowConfirm;
use crate::store::InventoryStateStoreFields;

#[component]
pub fn ItemTable() -> impl IntoView {
    let store = use_inventory().store;

    let body = Memo::new(move |_| {
        let category = store.category_filter().get();
        store.items().with(|items| {
            store.search_term().with(|term| table_body(items, term, category))
        })
    });

    view! {
        <table id="items-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Category"</th>
                    <th>"Quantity"</th>
                    <th>"Price"</th>
                    <th>"Description"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <Show
                    when=move || !body.with(TableBody::is_empty)
                    fallback=|| view! {
                        <tr>
                            <td colspan="6" class="empty-row">{EMPTY_PLACEHOLDER}</td>
                        </tr>
                    }
                >
                    <For
                        each=move || body.with(|b| b.rows().to_vec())
                        key=|row| row.clone()
                        children=move |row| view! { <ItemTableRow row=row /> }
                    />
                </Show>
            </tbody>
        </table>
    }
}

#[component]
fn ItemTableRow(row: ItemRow) -> impl IntoView {
    let ctx = use_inventory();
    let edit_id = row.id.clone();
    let delete_id = row.id.clone();

    view! {
        <tr>
            <td>{row.name}</td>
            <td>{row.category}</td>
            <td class=row.stock.css_class() title=row.stock.label()>{row.quantity}</td>
            <td>{row.price}</td>
            <td>{row.description}</td>
            <td class="actions">
                <button
                    class="btn btn-warning"
                    on:click=move |_| {
                        let id = edit_id.clone();
                        ctx.run(move |controller| async move { controller.begin_edit(id).await });
                    }
                >
                    "Edit"
                </button>
                <button
                    class="btn btn-danger"
                    on:click=move |_| {
                        let id = delete_id.clone();
                        ctx.run(move |controller| async move { controller.remove(id, &WindowConfirm).await });
                    }
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
