//! Alert Banner Component
//!
//! Shows the outcome of the last action. Each alert closes itself after the
//! configured delay or when the close button is clicked.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_inventory;
use crate::store::{InventoryStateStoreFields, StateHandle};

#[component]
pub fn AlertBanner() -> impl IntoView {
    let ctx = use_inventory();
    let store = ctx.store;
    let dismiss_ms = ctx.alert_dismiss_ms;

    // One timer per alert; the store ignores it if a newer alert took over
    Effect::new(move |prev: Option<Option<u64>>| {
        let seq = store.alert().with(|a| a.as_ref().map(|a| a.seq));
        if let Some(current) = seq {
            if prev.flatten() != Some(current) {
                spawn_local(async move {
                    TimeoutFuture::new(dismiss_ms).await;
                    store.apply(|s| s.expire_alert(current));
                });
            }
        }
        seq
    });

    view! {
        {move || store.alert().get().map(|alert| view! {
            <div class=alert.severity.css_class() role="alert">
                <span class="alert-message">{alert.message}</span>
                <button
                    type="button"
                    class="alert-close"
                    title="Dismiss"
                    on:click=move |_| store.update(|s| s.dismiss_alert())
                >
                    "×"
                </button>
            </div>
        })}
    }
}
