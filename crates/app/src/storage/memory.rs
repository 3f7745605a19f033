//! In-memory storage collaborator.

use std::sync::Arc;

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

use crate::{
    domain::{
        bags::{
            models::{Bag, BagUuid, Item, ItemUuid},
            repositories::{BagsRepository, ItemsRepository},
        },
        products::{
            ProductsRepository,
            models::{Merchant, MerchantUuid, Product, ProductUuid},
        },
    },
    storage::StorageError,
};

/// Shared in-memory store backing every repository trait.
///
/// Cloning is cheap and every clone sees the same records. Each map has its
/// own lock; nothing here coordinates operations spanning several maps.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Records>,
}

#[derive(Debug, Default)]
struct Records {
    merchants: RwLock<FxHashMap<MerchantUuid, Merchant>>,
    products: RwLock<FxHashMap<ProductUuid, Product>>,
    bags: RwLock<FxHashMap<BagUuid, Bag>>,
    items: RwLock<FxHashMap<ItemUuid, Item>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a merchant in the catalog.
    pub async fn insert_merchant(&self, merchant: Merchant) {
        self.inner
            .merchants
            .write()
            .await
            .insert(merchant.uuid, merchant);
    }

    pub async fn find_merchant(&self, merchant: MerchantUuid) -> Option<Merchant> {
        self.inner.merchants.read().await.get(&merchant).cloned()
    }

    /// Register a product in the catalog. Its merchant must already exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Missing`] when the product's merchant is unknown.
    pub async fn insert_product(&self, product: Product) -> Result<Product, StorageError> {
        if !self
            .inner
            .merchants
            .read()
            .await
            .contains_key(&product.merchant)
        {
            return Err(StorageError::Missing(product.merchant.into_uuid()));
        }

        self.inner
            .products
            .write()
            .await
            .insert(product.uuid, product.clone());

        Ok(product)
    }
}

#[async_trait]
impl ProductsRepository for MemoryStore {
    async fn find_product(&self, product: ProductUuid) -> Result<Option<Product>, StorageError> {
        Ok(self.inner.products.read().await.get(&product).cloned())
    }
}

#[async_trait]
impl BagsRepository for MemoryStore {
    async fn find_bag(&self, bag: BagUuid) -> Result<Option<Bag>, StorageError> {
        Ok(self.inner.bags.read().await.get(&bag).cloned())
    }

    async fn save_bag(&self, bag: Bag) -> Result<Bag, StorageError> {
        self.inner.bags.write().await.insert(bag.uuid, bag.clone());

        Ok(bag)
    }
}

#[async_trait]
impl ItemsRepository for MemoryStore {
    async fn find_item(&self, item: ItemUuid) -> Result<Option<Item>, StorageError> {
        Ok(self.inner.items.read().await.get(&item).cloned())
    }

    async fn save_item(&self, item: Item) -> Result<Item, StorageError> {
        let mut items = self.inner.items.write().await;

        if items
            .get(&item.uuid)
            .is_some_and(|existing| existing.bag != item.bag)
        {
            return Err(StorageError::Conflict(item.uuid.into_uuid()));
        }

        items.insert(item.uuid, item.clone());

        Ok(item)
    }

    async fn delete_item(&self, item: ItemUuid) -> Result<(), StorageError> {
        self.inner
            .items
            .write()
            .await
            .remove(&item)
            .map(|_removed| ())
            .ok_or(StorageError::Missing(item.into_uuid()))
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use super::*;

    fn merchant() -> Merchant {
        Merchant {
            uuid: MerchantUuid::new(),
            name: "Cantina".to_string(),
        }
    }

    #[tokio::test]
    async fn clones_share_records() -> TestResult {
        let store = MemoryStore::new();
        let clone = store.clone();
        let bag = Bag::new(BagUuid::new(), Timestamp::now());

        store.save_bag(bag.clone()).await?;

        assert_eq!(clone.find_bag(bag.uuid).await?, Some(bag));

        Ok(())
    }

    #[tokio::test]
    async fn save_bag_replaces_existing_record() -> TestResult {
        let store = MemoryStore::new();
        let mut bag = Bag::new(BagUuid::new(), Timestamp::now());

        store.save_bag(bag.clone()).await?;

        bag.closed = true;
        store.save_bag(bag.clone()).await?;

        assert_eq!(store.find_bag(bag.uuid).await?, Some(bag));

        Ok(())
    }

    #[tokio::test]
    async fn product_requires_known_merchant() {
        let store = MemoryStore::new();
        let unknown = MerchantUuid::new();

        let result = store
            .insert_product(Product {
                uuid: ProductUuid::new(),
                name: "Açaí".to_string(),
                price: 15_00,
                merchant: unknown,
            })
            .await;

        assert!(
            matches!(result, Err(StorageError::Missing(uuid)) if uuid == unknown.into_uuid()),
            "expected Missing, got {result:?}"
        );
    }

    #[tokio::test]
    async fn inserted_product_can_be_found() -> TestResult {
        let store = MemoryStore::new();
        let merchant = merchant();

        store.insert_merchant(merchant.clone()).await;

        let product = store
            .insert_product(Product {
                uuid: ProductUuid::new(),
                name: "Açaí".to_string(),
                price: 15_00,
                merchant: merchant.uuid,
            })
            .await?;

        assert_eq!(store.find_product(product.uuid).await?, Some(product));
        assert_eq!(store.find_merchant(merchant.uuid).await, Some(merchant));

        Ok(())
    }

    #[tokio::test]
    async fn deleting_unknown_item_is_missing() {
        let store = MemoryStore::new();
        let item = ItemUuid::new();

        let result = store.delete_item(item).await;

        assert!(
            matches!(result, Err(StorageError::Missing(uuid)) if uuid == item.into_uuid()),
            "expected Missing, got {result:?}"
        );
    }

    fn item(bag: BagUuid, merchant: MerchantUuid) -> Item {
        Item {
            uuid: ItemUuid::new(),
            quantity: 2,
            bag,
            product: Product {
                uuid: ProductUuid::new(),
                name: "Pão de queijo".to_string(),
                price: 2_50,
                merchant,
            },
        }
    }

    #[tokio::test]
    async fn item_cannot_move_to_another_bag() -> TestResult {
        let store = MemoryStore::new();
        let original = item(BagUuid::new(), MerchantUuid::new());

        store.save_item(original.clone()).await?;

        let mut moved = original.clone();
        moved.bag = BagUuid::new();

        let result = store.save_item(moved).await;

        assert!(
            matches!(result, Err(StorageError::Conflict(uuid)) if uuid == original.uuid.into_uuid()),
            "expected Conflict, got {result:?}"
        );
        assert_eq!(store.find_item(original.uuid).await?, Some(original));

        Ok(())
    }

    #[tokio::test]
    async fn item_can_be_resaved_in_same_bag() -> TestResult {
        let store = MemoryStore::new();
        let mut saved = item(BagUuid::new(), MerchantUuid::new());

        store.save_item(saved.clone()).await?;

        saved.quantity = 5;
        store.save_item(saved.clone()).await?;

        assert_eq!(store.find_item(saved.uuid).await?, Some(saved));

        Ok(())
    }

    #[tokio::test]
    async fn deleted_item_is_gone() -> TestResult {
        let store = MemoryStore::new();
        let merchant = merchant();

        store.insert_merchant(merchant.clone()).await;

        let item = Item {
            uuid: ItemUuid::new(),
            quantity: 2,
            bag: BagUuid::new(),
            product: Product {
                uuid: ProductUuid::new(),
                name: "Pão de queijo".to_string(),
                price: 2_50,
                merchant: merchant.uuid,
            },
        };

        store.save_item(item.clone()).await?;
        store.delete_item(item.uuid).await?;

        assert!(store.find_item(item.uuid).await?.is_none());

        Ok(())
    }
}
