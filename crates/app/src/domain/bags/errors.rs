//! Bags service errors.

use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum BagsServiceError {
    #[error("bag not found")]
    BagNotFound,

    #[error("product not found")]
    ProductNotFound,

    #[error("item not found in bag")]
    ItemNotFound,

    #[error("bag is closed")]
    BagClosed,

    #[error("bag has no items")]
    EmptyBag,

    #[error("bag already holds products from another merchant")]
    MerchantMismatch,

    #[error("item id is already in use")]
    DuplicateItem,

    #[error("item quantity must be at least one")]
    InvalidQuantity,

    #[error("bag total does not fit in a u64")]
    TotalOverflow,

    #[error("storage error")]
    Storage(#[from] StorageError),
}
