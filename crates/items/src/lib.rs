//! `itemforge-items` — the item model and the in-memory item store.

pub mod item;
pub mod store;

pub use item::{Item, NewItem};
pub use store::{InMemoryItemStore, ItemStore};
