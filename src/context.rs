//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Item;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The ordered item list - read
    pub items: ReadSignal<Vec<Item>>,
    /// The ordered item list - write
    set_items: WriteSignal<Vec<Item>>,
}

impl AppContext {
    pub fn new(items: (ReadSignal<Vec<Item>>, WriteSignal<Vec<Item>>)) -> Self {
        Self {
            items: items.0,
            set_items: items.1,
        }
    }

    /// Adopt the sequence returned by a backend mutation
    pub fn replace(&self, items: Vec<Item>) {
        self.set_items.set(items);
    }

    /// Insert a freshly created item at the front, mirroring the backend
    pub fn push_front(&self, item: Item) {
        self.set_items.update(|items| items.insert(0, item));
    }
}
