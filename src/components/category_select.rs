//! Category Select Component
//!
//! Reusable category dropdown with an empty leading option.

use leptos::prelude::*;

use crate::models::Category;

/// Category dropdown; the empty option carries `placeholder`
#[component]
pub fn CategorySelect(
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] placeholder: String,
    #[prop(optional)] id: Option<&'static str>,
) -> impl IntoView {
    view! {
        <select id=id on:change=move |ev| on_change.run(event_target_value(&ev))>
            <option value="" prop:selected=move || value.get().is_empty()>{placeholder}</option>
            {Category::ALL.iter().map(|category| {
                let name = category.as_str();
                view! {
                    <option value=name prop:selected=move || value.get() == name>
                        {name}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
