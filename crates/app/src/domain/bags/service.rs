//! Bags service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{debug, info};

use crate::domain::{
    bags::{
        errors::BagsServiceError,
        models::{Bag, BagUuid, Item, ItemUuid, NewItem, PaymentMethod},
        repositories::{BagsRepository, ItemsRepository},
    },
    products::ProductsRepository,
};

/// Bag rules on top of the three storage collaborators.
#[derive(Clone)]
pub struct RepositoryBagsService {
    bags: Arc<dyn BagsRepository>,
    products: Arc<dyn ProductsRepository>,
    items: Arc<dyn ItemsRepository>,
}

impl RepositoryBagsService {
    #[must_use]
    pub fn new(
        bags: Arc<dyn BagsRepository>,
        products: Arc<dyn ProductsRepository>,
        items: Arc<dyn ItemsRepository>,
    ) -> Self {
        Self {
            bags,
            products,
            items,
        }
    }

    async fn find_bag(&self, bag: BagUuid) -> Result<Bag, BagsServiceError> {
        self.bags
            .find_bag(bag)
            .await?
            .ok_or(BagsServiceError::BagNotFound)
    }
}

impl Debug for RepositoryBagsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("RepositoryBagsService").finish_non_exhaustive()
    }
}

#[async_trait]
impl BagsService for RepositoryBagsService {
    async fn add_item(&self, bag: BagUuid, item: NewItem) -> Result<Item, BagsServiceError> {
        let mut bag = self.find_bag(bag).await?;

        if bag.closed {
            return Err(BagsServiceError::BagClosed);
        }

        if item.quantity == 0 {
            return Err(BagsServiceError::InvalidQuantity);
        }

        // Item ids are client-supplied; each may belong to one bag, once.
        if bag.items.iter().any(|existing| existing.uuid == item.uuid)
            || self.items.find_item(item.uuid).await?.is_some()
        {
            return Err(BagsServiceError::DuplicateItem);
        }

        let product = self
            .products
            .find_product(item.product)
            .await?
            .ok_or(BagsServiceError::ProductNotFound)?;

        if bag
            .merchant()
            .is_some_and(|merchant| merchant != product.merchant)
        {
            return Err(BagsServiceError::MerchantMismatch);
        }

        let item = Item {
            uuid: item.uuid,
            quantity: item.quantity,
            bag: bag.uuid,
            product,
        };

        bag.items.push(item.clone());
        bag.total = bag
            .calculate_total()
            .ok_or(BagsServiceError::TotalOverflow)?;
        bag.updated_at = Timestamp::now();

        let bag = self.bags.save_bag(bag).await?;
        let item = self.items.save_item(item).await?;

        info!(bag = %bag.uuid, item = %item.uuid, total = bag.total, "item added to bag");

        Ok(item)
    }

    async fn remove_item(&self, bag: BagUuid, item: ItemUuid) -> Result<Item, BagsServiceError> {
        let mut bag = self.find_bag(bag).await?;

        if bag.is_empty() {
            return Err(BagsServiceError::EmptyBag);
        }

        let position = bag
            .items
            .iter()
            .position(|candidate| candidate.uuid == item)
            .ok_or(BagsServiceError::ItemNotFound)?;

        // Closed is only reported once the item is known to be in the bag.
        if bag.closed {
            return Err(BagsServiceError::BagClosed);
        }

        let removed = bag.items.remove(position);

        bag.total = bag
            .calculate_total()
            .ok_or(BagsServiceError::TotalOverflow)?;
        bag.updated_at = Timestamp::now();

        let bag = self.bags.save_bag(bag).await?;

        self.items.delete_item(removed.uuid).await?;

        info!(bag = %bag.uuid, item = %removed.uuid, total = bag.total, "item removed from bag");

        Ok(removed)
    }

    async fn view_bag(&self, bag: BagUuid) -> Result<Bag, BagsServiceError> {
        let bag = self.find_bag(bag).await?;

        debug!(bag = %bag.uuid, items = bag.items.len(), "bag viewed");

        Ok(bag)
    }

    async fn close_bag(&self, bag: BagUuid, payment_method: i32) -> Result<Bag, BagsServiceError> {
        let mut bag = self.find_bag(bag).await?;

        if bag.is_empty() {
            return Err(BagsServiceError::EmptyBag);
        }

        if bag.closed {
            return Err(BagsServiceError::BagClosed);
        }

        bag.payment_method = Some(PaymentMethod::from_code(payment_method));
        bag.closed = true;
        bag.updated_at = Timestamp::now();

        let bag = self.bags.save_bag(bag).await?;

        info!(bag = %bag.uuid, total = bag.total, payment_method = ?bag.payment_method, "bag closed");

        Ok(bag)
    }
}

#[automock]
#[async_trait]
pub trait BagsService: Send + Sync {
    /// Add a product to a bag and return the created item.
    async fn add_item(&self, bag: BagUuid, item: NewItem) -> Result<Item, BagsServiceError>;

    /// Remove an item from a bag and return it.
    async fn remove_item(&self, bag: BagUuid, item: ItemUuid) -> Result<Item, BagsServiceError>;

    /// Retrieve a single bag with its items.
    async fn view_bag(&self, bag: BagUuid) -> Result<Bag, BagsServiceError>;

    /// Close a bag, paying with the method identified by `payment_method`
    /// (`0` for cash, anything else for the card terminal).
    ///
    /// A bag closes once: closing it again fails with
    /// [`BagsServiceError::BagClosed`] and keeps the first payment method.
    async fn close_bag(&self, bag: BagUuid, payment_method: i32) -> Result<Bag, BagsServiceError>;
}
