//! The order cart: an unpersisted, append-only list of menu items.

pub mod error;

pub use error::*;

use crate::model::{Menu, MenuItem};
use serde::Serialize;

/// Items selected during the current session, in the order they were added.
///
/// Duplicates are allowed; an entry has no identity beyond its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    items: Vec<MenuItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    /// Looks `item_id` up in `menu` and appends a copy of the item.
    pub fn add_from_menu<'m>(
        &mut self,
        menu: &'m Menu,
        item_id: &str,
    ) -> Result<&'m MenuItem, CartError> {
        let item = menu
            .item(item_id)
            .ok_or_else(|| CartError::UnknownItem(item_id.to_string()))?;
        self.items.push(item.clone());
        Ok(item)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of item prices.
    pub fn total(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.price)).sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
