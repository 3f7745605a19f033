//! Bag Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;

use crate::{
    domain::products::models::{MerchantUuid, Product, ProductUuid},
    uuids::TypedUuid,
};

/// Bag UUID
pub type BagUuid = TypedUuid<Bag>;

/// Bag Model
#[derive(Debug, Clone, PartialEq)]
pub struct Bag {
    pub uuid: BagUuid,
    /// Items in insertion order; the first one fixes the bag's merchant.
    pub items: Vec<Item>,
    /// Sum of `price * quantity` over `items`, in minor currency units.
    pub total: u64,
    pub closed: bool,
    pub payment_method: Option<PaymentMethod>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Bag {
    /// An open, empty bag.
    #[must_use]
    pub fn new(uuid: BagUuid, now: Timestamp) -> Self {
        Self {
            uuid,
            items: Vec::new(),
            total: 0,
            closed: false,
            payment_method: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The merchant every item in this bag belongs to, if it has any items.
    #[must_use]
    pub fn merchant(&self) -> Option<MerchantUuid> {
        self.items.first().map(|item| item.product.merchant)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn state(&self) -> BagState {
        match (self.closed, self.items.is_empty()) {
            (true, _) => BagState::Closed,
            (false, true) => BagState::OpenEmpty,
            (false, false) => BagState::OpenNonEmpty,
        }
    }

    /// Sum of every item's subtotal, or `None` on overflow.
    #[must_use]
    pub fn calculate_total(&self) -> Option<u64> {
        self.items
            .iter()
            .try_fold(0_u64, |total, item| total.checked_add(item.subtotal()?))
    }
}

/// Lifecycle state of a bag, derived from its items and closed flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BagState {
    OpenEmpty,
    OpenNonEmpty,
    Closed,
}

/// Item UUID
pub type ItemUuid = TypedUuid<Item>;

/// Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub uuid: ItemUuid,
    pub quantity: u32,
    pub bag: BagUuid,
    pub product: Product,
}

impl Item {
    /// `price * quantity`, or `None` on overflow.
    #[must_use]
    pub fn subtotal(&self) -> Option<u64> {
        self.product.price.checked_mul(u64::from(self.quantity))
    }
}

/// New Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub uuid: ItemUuid,
    pub product: ProductUuid,
    pub quantity: u32,
}

/// How a closed bag is paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    Cash,
    CardTerminal,
}

impl PaymentMethod {
    /// Map the numeric code sent by clients: `0` is cash, anything else is
    /// the card terminal.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Cash,
            _ => Self::CardTerminal,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::CardTerminal => "card_terminal",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
