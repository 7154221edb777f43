//! UI Components
//!
//! Leptos components for the item screen.

mod item_form;
mod item_table;
mod priority_selector;

pub use item_form::ItemForm;
pub use item_table::ItemTable;
pub use priority_selector::PrioritySelector;
