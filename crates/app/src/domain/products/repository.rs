//! Products Repository

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::products::models::{Product, ProductUuid},
    storage::StorageError,
};

/// Read-only access to the product catalog.
#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Look up a product by id.
    async fn find_product(&self, product: ProductUuid) -> Result<Option<Product>, StorageError>;
}
