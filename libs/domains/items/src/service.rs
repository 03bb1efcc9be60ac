//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::ItemResult;
use crate::lookup;
use crate::models::{CreateItem, Item, ItemPage, ListQuery};
use crate::pagination::{PageRequest, paginate};
use crate::query::filter_items;
use crate::repository::ItemStore;

/// Item service providing the list, lookup and create operations.
///
/// Every operation reads the whole collection from the store. Creation is a
/// read-modify-write of the full file with no locking, so two concurrent
/// creates can lose one of the new items.
pub struct ItemService<S: ItemStore> {
    store: Arc<S>,
}

impl<S: ItemStore> ItemService<S> {
    /// Create a new ItemService on a (possibly shared) store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Filter by name, then paginate the matches
    #[instrument(skip(self))]
    pub async fn list_items(&self, query: ListQuery) -> ItemResult<ItemPage> {
        let items = self.store.load_all().await?;
        let matches = filter_items(items, query.q.as_deref());
        let request = PageRequest::from_params(query.page.as_deref(), query.limit.as_deref());

        let (items, pagination) = paginate(matches, request);
        Ok(ItemPage { items, pagination })
    }

    /// Get an item by ID. `None` stands for an id that did not parse.
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: Option<u64>) -> ItemResult<Item> {
        let items = self.store.load_all().await?;
        lookup::find_by_id(&items, id).cloned()
    }

    /// Create a new item and persist the whole collection
    #[instrument(skip(self, input))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        let mut items = self.store.load_all().await?;
        let item = lookup::create(&mut items, input)?;
        self.store.save_all(&items).await?;

        tracing::info!(item_id = item.id, "Item created");
        Ok(item)
    }
}

impl<S: ItemStore> Clone for ItemService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ItemError;
    use crate::repository::MockItemStore;

    fn sample_items() -> Vec<Item> {
        [
            (1, "Test Item 1", "Test", 100),
            (2, "Test Item 2", "Test", 200),
            (3, "Another Item", "Other", 300),
        ]
        .into_iter()
        .map(|(id, name, category, price)| {
            Item::new(
                id,
                CreateItem {
                    name: Some(name.into()),
                    category: Some(category.into()),
                    price: Some(price.into()),
                    ..CreateItem::default()
                },
            )
        })
        .collect()
    }

    fn service_with(store: MockItemStore) -> ItemService<MockItemStore> {
        ItemService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_list_items_filters_then_paginates() {
        let mut store = MockItemStore::new();
        store.expect_load_all().returning(|| Ok(sample_items()));

        let page = service_with(store)
            .list_items(ListQuery {
                q: Some("test".into()),
                limit: Some("1".into()),
                ..ListQuery::default()
            })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 1);
        assert_eq!(page.pagination.total_items, 2);
        assert_eq!(page.pagination.total_pages, 2);
        assert!(page.pagination.has_next_page);
    }

    #[tokio::test]
    async fn test_list_items_coerces_bad_params() {
        let mut store = MockItemStore::new();
        store.expect_load_all().returning(|| Ok(sample_items()));

        let page = service_with(store)
            .list_items(ListQuery {
                q: None,
                page: Some("zero".into()),
                limit: Some("-1".into()),
            })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 3);
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.pagination.limit, 20);
    }

    #[tokio::test]
    async fn test_get_item_found_and_missing() {
        let mut store = MockItemStore::new();
        store.expect_load_all().times(3).returning(|| Ok(sample_items()));
        let service = service_with(store);

        assert_eq!(service.get_item(Some(3)).await.unwrap().id, 3);
        assert!(matches!(
            service.get_item(Some(999)).await,
            Err(ItemError::NotFound)
        ));
        assert!(matches!(service.get_item(None).await, Err(ItemError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_item_storage_failure_wins_over_bad_id() {
        let mut store = MockItemStore::new();
        store
            .expect_load_all()
            .returning(|| Err(ItemError::Storage("missing".into())));

        assert!(matches!(
            service_with(store).get_item(None).await,
            Err(ItemError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn test_create_item_assigns_next_id_and_saves() {
        let mut store = MockItemStore::new();
        store.expect_load_all().returning(|| Ok(sample_items()));
        store
            .expect_save_all()
            .withf(|items| items.len() == 4 && items[3].id == 4)
            .times(1)
            .returning(|_| Ok(()));

        let item = service_with(store)
            .create_item(CreateItem {
                name: Some("Keyboard".into()),
                ..CreateItem::default()
            })
            .await
            .unwrap();

        assert_eq!(item.id, 4);
        assert_eq!(item.name.as_deref(), Some("Keyboard"));
    }

    #[tokio::test]
    async fn test_create_item_save_failure_propagates() {
        let mut store = MockItemStore::new();
        store.expect_load_all().returning(|| Ok(vec![]));
        store
            .expect_save_all()
            .returning(|_| Err(ItemError::Storage("read-only".into())));

        assert!(matches!(
            service_with(store).create_item(CreateItem::default()).await,
            Err(ItemError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn test_create_item_read_failure_skips_save() {
        let mut store = MockItemStore::new();
        store
            .expect_load_all()
            .returning(|| Err(ItemError::Storage("corrupt".into())));
        store.expect_save_all().never();

        assert!(service_with(store)
            .create_item(CreateItem::default())
            .await
            .is_err());
    }
}
