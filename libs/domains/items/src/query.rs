//! Name search over an in-memory item collection.

use crate::models::Item;

/// Keep only items whose name contains `query`, ignoring case.
///
/// An absent or empty query returns `items` untouched. Relative order is
/// preserved, and items without a name never match a non-empty query.
pub fn filter_items(items: Vec<Item>, query: Option<&str>) -> Vec<Item> {
    let needle = match query {
        Some(q) if !q.is_empty() => q.to_lowercase(),
        _ => return items,
    };

    items
        .into_iter()
        .filter(|item| {
            item.name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .collect()
}
