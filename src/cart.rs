//! In-memory cart store.
//!
//! Tab-lifetime state: the cart lives for one page session and is never
//! persisted. It is an explicit store object handed to the components that
//! need it (drawer, badge, gallery views) — not ambient global state — so
//! each consumer depends only on the capability it uses.
//!
//! Semantics worth being explicit about:
//!
//! - `add` always appends. There is no de-duplication and no quantity
//!   field; adding the same artwork twice yields two entries.
//! - `remove` drops **every** entry with the matching identifier, not just
//!   the first. Since duplicate adds are allowed, identifiers are not
//!   unique within the cart, and removing an artwork means removing all
//!   interest in it.
//! - `clear` unconditionally empties the cart.

use crate::types::{Artwork, CartItem};

/// The cart: an ordered list of lightweight artwork copies.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item. Duplicates are kept.
    pub fn add(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Copy an artwork into the cart.
    pub fn add_artwork(&mut self, artwork: &Artwork) {
        self.add(CartItem::from_artwork(artwork));
    }

    /// Remove every item whose identifier matches.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Read-only snapshot for the drawer.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Badge count.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
