//! UI Components
//!
//! Reusable Leptos components.

mod item_counter;
mod list_row;
mod list_view;
mod new_item_form;

pub use item_counter::ItemCounter;
pub use list_row::ListRow;
pub use list_view::ShoppingListView;
pub use new_item_form::NewItemForm;
