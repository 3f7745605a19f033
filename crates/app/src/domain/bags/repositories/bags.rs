//! Bags Repository

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::bags::models::{Bag, BagUuid},
    storage::StorageError,
};

#[automock]
#[async_trait]
pub trait BagsRepository: Send + Sync {
    /// Look up a bag, including its items.
    async fn find_bag(&self, bag: BagUuid) -> Result<Option<Bag>, StorageError>;

    /// Insert or replace a bag and return what was stored.
    async fn save_bag(&self, bag: Bag) -> Result<Bag, StorageError>;
}
