//! Product Models

use crate::uuids::TypedUuid;

/// Merchant UUID
pub type MerchantUuid = TypedUuid<Merchant>;

/// Merchant Model
///
/// The restaurant or vendor a product belongs to. A bag only ever holds
/// products from a single merchant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merchant {
    pub uuid: MerchantUuid,
    pub name: String,
}

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Product Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub uuid: ProductUuid,
    pub name: String,
    /// Unit price in minor currency units.
    pub price: u64,
    pub merchant: MerchantUuid,
}
