//! Fixtures
//!
//! Seed data compiled into the binary. The default product list lives in
//! `fixtures/products/default.yml` and is embedded at build time, so nothing is read
//! from disk when the program runs.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    products::{Product, ProductId},
};

const DEFAULT_PRODUCTS: &str = include_str!("../fixtures/products/default.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Product identifier of zero
    #[error("Product ids must be positive, got 0 for {0}")]
    InvalidProductId(String),

    /// Catalog construction error
    #[error("Failed to create catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Products in catalog order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: u32,

    /// Product name
    pub name: String,

    /// Product price (e.g., "26890 THB")
    pub price: String,

    /// Units in stock
    pub stock: u32,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        let id = ProductId::new(fixture.id)
            .ok_or_else(|| FixtureError::InvalidProductId(fixture.name.clone()))?;

        Ok(Product {
            id,
            name: fixture.name,
            price: Money::from_minor(minor_units, currency),
            stock: fixture.stock,
        })
    }
}

/// Parse a price string (e.g., "26890 THB") into minor units and its ISO currency.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY", if the
/// amount is not a non-negative decimal, or if the currency code is not an ISO code.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let currency =
        iso::find(code).ok_or_else(|| FixtureError::UnknownCurrency(code.to_string()))?;

    let amount = amount
        .parse::<Decimal>()
        .ok()
        .filter(|amount| !amount.is_sign_negative())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = 10_i64
        .checked_pow(currency.exponent)
        .and_then(|scale| amount.checked_mul(Decimal::from(scale)))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}

/// Parse a products fixture document into products, in document order.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the YAML is malformed or a product is invalid.
pub fn parse_products(yaml: &str) -> Result<Vec<Product>, FixtureError> {
    let fixture: ProductsFixture = serde_norway::from_str(yaml)?;

    fixture.products.into_iter().map(Product::try_from).collect()
}

/// Build a catalog from a products fixture document.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the document cannot be parsed or the products do
/// not form a valid catalog.
pub fn catalog_from_yaml(yaml: &str) -> Result<Catalog, FixtureError> {
    Ok(Catalog::from_products(parse_products(yaml)?)?)
}

/// The built-in catalog of seven products.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the embedded fixture is invalid.
pub fn default_catalog() -> Result<Catalog, FixtureError> {
    catalog_from_yaml(DEFAULT_PRODUCTS)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn default_catalog_has_seven_products_in_order() -> TestResult {
        let catalog = default_catalog()?;

        let rows: Vec<(u32, &str, i64, u32)> = catalog
            .iter()
            .map(|p| (p.id.get(), p.name.as_str(), p.price.to_minor_units(), p.stock))
            .collect();

        assert_eq!(
            rows,
            vec![
                (1, "iPhone 13", 2_689_000, 54),
                (2, "iPhone 14", 4_279_000, 32),
                (3, "iPhone 15", 5_209_000, 61),
                (4, "iPhone 16", 5_999_000, 23),
                (5, "iPad 10th Gen", 3_359_000, 9),
                (6, "iPad 9th Gen", 2_549_000, 6),
                (7, "iPad Pro 2022", 7_558_000, 19),
            ]
        );
        assert_eq!(catalog.currency(), iso::THB);

        Ok(())
    }

    #[test]
    fn parse_price_reads_baht_into_satang() -> TestResult {
        let (minor, currency) = parse_price("26890.50 THB")?;

        assert_eq!(minor, 2_689_050);
        assert_eq!(currency, iso::THB);

        Ok(())
    }

    #[test]
    fn parse_price_scales_by_currency_exponent() -> TestResult {
        let (minor, currency) = parse_price("500 JPY")?;

        assert_eq!(minor, 500);
        assert_eq!(currency, iso::JPY);

        Ok(())
    }

    #[test]
    fn parse_price_rejects_trailing_tokens() {
        let result = parse_price("1 THB extra");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("2.99THB");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_negative_amounts() {
        let result = parse_price("-1.00 THB");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn zero_product_id_is_rejected() {
        let yaml = "products:\n  - id: 0\n    name: Ghost\n    price: \"1 USD\"\n    stock: 1\n";

        let result = parse_products(yaml);

        assert!(matches!(result, Err(FixtureError::InvalidProductId(name)) if name == "Ghost"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let yaml = "products:\n  - id: 1\n    name: A\n    price: \"1 USD\"\n    stock: 1\n  - id: 1\n    name: B\n    price: \"2 USD\"\n    stock: 1\n";

        let result = catalog_from_yaml(yaml);

        assert!(matches!(
            result,
            Err(FixtureError::Catalog(CatalogError::DuplicateProduct(_)))
        ));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        assert!(matches!(
            parse_products("products: [oops"),
            Err(FixtureError::Yaml(_))
        ));
    }
}
