//! Single-item lookup and creation over an in-memory collection.

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item};

/// Find the item with the given id. `None` ids (unparseable path segments)
/// never match.
pub fn find_by_id(items: &[Item], id: Option<u64>) -> ItemResult<&Item> {
    id.and_then(|id| items.iter().find(|item| item.id == id))
        .ok_or(ItemError::NotFound)
}

/// Next free id: one past the current maximum, or 1 for an empty collection.
pub fn next_id(items: &[Item]) -> ItemResult<u64> {
    match items.iter().map(|item| item.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(ItemError::IdSpaceExhausted),
    }
}

/// Append a new item built from `input` and return a copy of it.
pub fn create(items: &mut Vec<Item>, input: CreateItem) -> ItemResult<Item> {
    let item = Item::new(next_id(items)?, input);
    items.push(item.clone());
    Ok(item)
}
