//! Item Counter Component
//!
//! Derived display of purchased over total items. Never stored; recomputed
//! from the store whenever the list changes.

use leptos::prelude::*;

use crate::list;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemCounter() -> impl IntoView {
    let store = use_app_store();

    let text = move || {
        let items = store.items().get();
        let (purchased, total) = list::counts(&items);
        format!("Purchased items: {}/{}", purchased, total)
    };

    view! {
        <p id="item-counter" class="item-counter">{text}</p>
    }
}
