//! # Shopping List Module
//!
//! A session-local, insertion-ordered list of items to buy. Items are plain
//! copies of whatever the caller hands in; nothing links back to the recipe
//! they came from. The list is never persisted.

use tracing::debug;
use uuid::Uuid;

/// One entry on the shopping list
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItem {
    /// Session-unique identifier
    pub id: String,
    /// Quantity; `None` for lines like "salt to taste"
    pub count: Option<f64>,
    /// Canonical unit, empty when the line has none
    pub unit: String,
    /// Ingredient text
    pub name: String,
}

/// Insertion-ordered collection of [`ShoppingItem`]s
#[derive(Debug, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// All items in insertion order
    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Append an item under a fresh id and return it.
    ///
    /// Duplicates are allowed: adding the same ingredient twice yields two
    /// items with distinct ids.
    pub fn add_item(&mut self, count: Option<f64>, unit: &str, name: &str) -> &ShoppingItem {
        let item = ShoppingItem {
            id: Uuid::new_v4().to_string(),
            count,
            unit: unit.to_string(),
            name: name.to_string(),
        };
        debug!(item_id = %item.id, name = %name, "Added shopping list item");
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// Remove the item with the given id; `false` when no such item exists
    pub fn delete_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let deleted = self.items.len() != before;
        if deleted {
            debug!(item_id = %id, "Deleted shopping list item");
        }
        deleted
    }

    /// Overwrite the count of the item with the given id; `false` when absent
    pub fn update_count(&mut self, id: &str, new_count: f64) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.count = Some(new_count);
                true
            }
            None => false,
        }
    }
}
