//! Bag Responses

use std::string::ToString;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sacola_app::domain::bags::models::{Bag, Item, PaymentMethod};

/// Bag Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BagResponse {
    /// The unique identifier of the bag
    pub uuid: Uuid,

    /// The items in the bag, in the order they were added
    pub items: Vec<ItemResponse>,

    /// Sum of unit price times quantity over all items, in minor units
    pub total: u64,

    /// Whether the bag has been closed
    pub closed: bool,

    /// How the bag is paid for (`cash` or `card_terminal`), once closed
    pub payment_method: Option<String>,

    /// The date and time the bag was created
    pub created_at: String,

    /// The date and time the bag was last updated
    pub updated_at: String,
}

impl From<Bag> for BagResponse {
    fn from(bag: Bag) -> Self {
        Self {
            uuid: bag.uuid.into(),
            items: bag.items.into_iter().map(ItemResponse::from).collect(),
            total: bag.total,
            closed: bag.closed,
            payment_method: bag
                .payment_method
                .map(PaymentMethod::as_str)
                .map(ToString::to_string),
            created_at: bag.created_at.to_string(),
            updated_at: bag.updated_at.to_string(),
        }
    }
}

/// Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemResponse {
    /// The unique identifier of the item
    pub uuid: Uuid,

    /// The bag holding the item
    pub bag: Uuid,

    /// The product in the item
    pub product: Uuid,

    /// The product name
    pub name: String,

    /// The merchant selling the product
    pub merchant: Uuid,

    /// Unit price of the product, in minor units
    pub unit_price: u64,

    /// How many units are in the bag
    pub quantity: u32,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            uuid: item.uuid.into(),
            bag: item.bag.into(),
            product: item.product.uuid.into(),
            name: item.product.name,
            merchant: item.product.merchant.into(),
            unit_price: item.product.price,
            quantity: item.quantity,
        }
    }
}
