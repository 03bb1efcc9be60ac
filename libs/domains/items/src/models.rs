use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use utoipa::{IntoParams, ToSchema};

use crate::pagination::PaginationMeta;

/// Item entity as stored in the JSON data file.
///
/// Creation enforces no required fields, so everything except `id` may be
/// missing. Unknown fields are kept and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier, assigned as max existing id + 1
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Kept as written in the file, so `100` stays `100` after a rewrite
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Number>,
    /// Any additional fields supplied by clients
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

/// DTO for creating a new item. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct CreateItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Number>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Build a new item with the given id from a creation payload.
    ///
    /// A client-supplied `id` never overrides the assigned one.
    pub fn new(id: u64, input: CreateItem) -> Self {
        let mut extra = input.extra;
        extra.remove("id");

        Self {
            id,
            name: input.name,
            category: input.category,
            price: input.price,
            extra,
        }
    }

    /// Price as a float, 0 when absent
    pub fn price_or_zero(&self) -> f64 {
        self.price.as_ref().and_then(Number::as_f64).unwrap_or(0.0)
    }
}

/// Query parameters for listing items.
///
/// Kept as raw strings so malformed numbers fall back to defaults instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-insensitive substring to search for in item names
    pub q: Option<String>,
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size (default 20)
    pub limit: Option<String>,
}

/// One page of the filtered item list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemPage {
    pub items: Vec<Item>,
    pub pagination: PaginationMeta,
}

/// Aggregate figures over the whole stored collection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub total: usize,
    pub average_price: f64,
}

impl StatsSnapshot {
    /// Count and mean price. Items without a price contribute 0 to the sum.
    pub fn compute(items: &[Item]) -> Self {
        let total = items.len();
        let average_price = if total == 0 {
            0.0
        } else {
            items.iter().map(Item::price_or_zero).sum::<f64>() / total as f64
        };

        Self {
            total,
            average_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_round_trips_unknown_fields() {
        let raw = json!({"id": 7, "name": "Desk", "category": "Furniture", "price": 120.5, "stock": 3});
        let item: Item = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(item.id, 7);
        assert_eq!(item.name.as_deref(), Some("Desk"));
        assert_eq!(item.extra.get("stock"), Some(&json!(3)));
        assert_eq!(serde_json::to_value(&item).unwrap(), raw);
    }

    #[test]
    fn test_item_with_only_id_serializes_minimally() {
        let item = Item::new(4, CreateItem::default());
        assert_eq!(serde_json::to_value(&item).unwrap(), json!({"id": 4}));
    }

    #[test]
    fn test_new_item_ignores_client_id() {
        let input: CreateItem =
            serde_json::from_value(json!({"id": 999, "name": "Lamp", "color": "red"})).unwrap();
        let item = Item::new(12, input);

        assert_eq!(item.id, 12);
        assert_eq!(item.name.as_deref(), Some("Lamp"));
        assert!(!item.extra.contains_key("id"));
        assert_eq!(item.extra.get("color"), Some(&json!("red")));
    }

    #[test]
    fn test_stats_empty_collection() {
        let stats = StatsSnapshot::compute(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_price, 0.0);
        assert_eq!(
            serde_json::to_value(stats).unwrap(),
            json!({"total": 0, "averagePrice": 0.0})
        );
    }

    #[test]
    fn test_stats_mean_price() {
        let items: Vec<Item> = [100, 200, 300]
            .into_iter()
            .enumerate()
            .map(|(i, price)| Item {
                price: Some(Number::from(price)),
                ..Item::new(i as u64 + 1, CreateItem::default())
            })
            .collect();

        let stats = StatsSnapshot::compute(&items);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.average_price, 200.0);
    }

    #[test]
    fn test_price_keeps_its_written_form() {
        let raw = json!([
            {"id": 1, "price": 100},
            {"id": 2, "price": 100.0},
            {"id": 3, "price": 12.5}
        ]);
        let items: Vec<Item> = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(serde_json::to_value(&items).unwrap(), raw);
        assert_eq!(serde_json::to_string(&items[0]).unwrap(), r#"{"id":1,"price":100}"#);
        assert_eq!(StatsSnapshot::compute(&items).average_price, 212.5 / 3.0);
    }

    #[test]
    fn test_string_price_is_rejected() {
        assert!(serde_json::from_value::<CreateItem>(json!({"price": "12"})).is_err());
    }

    #[test]
    fn test_stats_missing_price_counts_as_zero() {
        let items = vec![
            Item {
                price: Some(Number::from(90)),
                ..Item::new(1, CreateItem::default())
            },
            Item::new(2, CreateItem::default()),
        ];
        let stats = StatsSnapshot::compute(&items);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.average_price, 45.0);
    }
}
