//! Bag Items Repository

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::bags::models::{Item, ItemUuid},
    storage::StorageError,
};

#[automock]
#[async_trait]
pub trait ItemsRepository: Send + Sync {
    /// Look up a single item record.
    async fn find_item(&self, item: ItemUuid) -> Result<Option<Item>, StorageError>;

    /// Insert or replace an item and return what was stored.
    async fn save_item(&self, item: Item) -> Result<Item, StorageError>;

    /// Delete an item record.
    async fn delete_item(&self, item: ItemUuid) -> Result<(), StorageError>;
}
