//! Catalog Fixtures
//!
//! Seeds a [`MemoryStore`] with merchants, their products and open bags from
//! a YAML document.

use std::{fs, path::Path};

use jiff::Timestamp;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::{
    domain::{
        bags::{models::Bag, repositories::BagsRepository},
        products::models::{Merchant, Product},
    },
    storage::{MemoryStore, StorageError},
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Store rejected a fixture record
    #[error("Failed to store fixture: {0}")]
    Storage(#[from] StorageError),
}

/// Catalog Fixture
#[derive(Debug, Default, Deserialize)]
pub struct CatalogFixture {
    /// Merchants with their products
    #[serde(default)]
    pub merchants: Vec<MerchantFixture>,

    /// Bags to create open and empty
    #[serde(default)]
    pub bags: Vec<BagFixture>,
}

/// Merchant Fixture
#[derive(Debug, Deserialize)]
pub struct MerchantFixture {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default)]
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    pub uuid: Uuid,
    pub name: String,

    /// Unit price (e.g., "12.50")
    pub price: String,
}

/// Bag Fixture
#[derive(Debug, Deserialize)]
pub struct BagFixture {
    pub uuid: Uuid,
}

/// What a fixture load added to the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub merchants: usize,
    pub products: usize,
    pub bags: usize,
}

impl CatalogFixture {
    /// Read and parse a fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        Self::from_yaml(&fs::read_to_string(path)?)
    }

    /// Parse a fixture document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid YAML for a catalog.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Insert every merchant, product and bag into `store`.
    ///
    /// Prices are validated before anything is written.
    ///
    /// # Errors
    ///
    /// Returns an error on an invalid price or when the store rejects a record.
    pub async fn load_into(self, store: &MemoryStore) -> Result<CatalogSummary, FixtureError> {
        let mut merchants = Vec::with_capacity(self.merchants.len());
        let mut products = Vec::new();

        for merchant in self.merchants {
            for product in merchant.products {
                products.push(Product {
                    uuid: product.uuid.into(),
                    name: product.name,
                    price: parse_price(&product.price)?,
                    merchant: merchant.uuid.into(),
                });
            }

            merchants.push(Merchant {
                uuid: merchant.uuid.into(),
                name: merchant.name,
            });
        }

        let summary = CatalogSummary {
            merchants: merchants.len(),
            products: products.len(),
            bags: self.bags.len(),
        };

        for merchant in merchants {
            store.insert_merchant(merchant).await;
        }

        for product in products {
            store.insert_product(product).await?;
        }

        let now = Timestamp::now();

        for bag in self.bags {
            store.save_bag(Bag::new(bag.uuid.into(), now)).await?;
        }

        info!(
            merchants = summary.merchants,
            products = summary.products,
            bags = summary.bags,
            "catalog fixture loaded"
        );

        Ok(summary)
    }
}

/// Parse a price string (e.g., "12.50") into minor units.
///
/// # Errors
///
/// Returns an error if the amount is not a decimal number, is negative, has
/// more than two fractional digits or does not fit in minor units.
pub fn parse_price(s: &str) -> Result<u64, FixtureError> {
    let amount = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() || amount.normalize().scale() > 2 {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.to_u64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::{
        bags::models::BagUuid,
        products::{ProductsRepository, models::ProductUuid},
    };

    use super::*;

    const CATALOG: &str = r#"
merchants:
  - uuid: 01990000-0000-7000-8000-000000000001
    name: Pizzaria Napoli
    products:
      - uuid: 01990000-0000-7000-8000-000000000011
        name: Margherita
        price: "42.90"
      - uuid: 01990000-0000-7000-8000-000000000012
        name: Guaraná
        price: "6"
  - uuid: 01990000-0000-7000-8000-000000000002
    name: Sushi Bar
bags:
  - uuid: 01990000-0000-7000-8000-000000000101
  - uuid: 01990000-0000-7000-8000-000000000102
"#;

    #[test]
    fn parse_price_accepts_whole_and_fractional_amounts() -> Result<(), FixtureError> {
        assert_eq!(parse_price("6")?, 6_00);
        assert_eq!(parse_price("42.90")?, 42_90);
        assert_eq!(parse_price("0.05")?, 5);
        assert_eq!(parse_price(" 1.5 ")?, 1_50);

        Ok(())
    }

    #[test]
    fn parse_price_rejects_sub_cent_amounts() {
        let result = parse_price("1.999");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_negative_amounts() {
        let result = parse_price("-1.00");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_garbage() {
        let result = parse_price("ten reais");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let result = CatalogFixture::from_yaml("merchants: [");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }

    #[tokio::test]
    async fn loads_catalog_into_store() -> TestResult {
        let store = MemoryStore::new();

        let summary = CatalogFixture::from_yaml(CATALOG)?
            .load_into(&store)
            .await?;

        assert_eq!(
            summary,
            CatalogSummary {
                merchants: 2,
                products: 2,
                bags: 2,
            }
        );

        let margherita = store
            .find_product(ProductUuid::from_uuid(
                "01990000-0000-7000-8000-000000000011".parse()?,
            ))
            .await?
            .ok_or("margherita should be loaded")?;

        assert_eq!(margherita.price, 42_90);
        assert_eq!(
            margherita.merchant.to_string(),
            "01990000-0000-7000-8000-000000000001"
        );

        let bag = store
            .find_bag(BagUuid::from_uuid(
                "01990000-0000-7000-8000-000000000101".parse()?,
            ))
            .await?
            .ok_or("bag should be loaded")?;

        assert!(bag.is_empty());
        assert!(!bag.closed);

        Ok(())
    }

    #[tokio::test]
    async fn invalid_price_writes_nothing() -> TestResult {
        let store = MemoryStore::new();
        let yaml = r#"
merchants:
  - uuid: 01990000-0000-7000-8000-000000000001
    name: Padaria
    products:
      - uuid: 01990000-0000-7000-8000-000000000011
        name: Sonho
        price: "abc"
"#;

        let result = CatalogFixture::from_yaml(yaml)?.load_into(&store).await;

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
        assert!(
            store
                .find_merchant("01990000-0000-7000-8000-000000000001".parse()?)
                .await
                .is_none()
        );

        Ok(())
    }
}
