//! Shopping List App
//!
//! Main application component: entry form, item list, derived counter.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ItemCounter, NewItemForm, ShoppingListView};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());

    // Provide the store to all children
    provide_context(store);

    view! {
        <main class="app-layout">
            <h1>"Shopping List"</h1>

            <NewItemForm />

            <ShoppingListView />

            <ItemCounter />
        </main>
    }
}
