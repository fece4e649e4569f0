//! Catalog

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::SlotMap;
use thiserror::Error;
use tracing::debug;

use crate::products::{Product, ProductId, ProductKey};

/// Errors raised while building the catalog or taking stock from it.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// No products were supplied, so the catalog currency is unknown.
    #[error("catalog has no products; currency unknown")]
    NoProducts,

    /// Two products share an identifier.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// A product's currency differs from the catalog currency.
    #[error("Currency mismatch: expected {expected}, found {found} for product {id}")]
    CurrencyMismatch {
        /// Product with the odd currency
        id: ProductId,

        /// Catalog currency
        expected: &'static str,

        /// Product currency
        found: &'static str,
    },

    /// No product has the given identifier.
    #[error("Product {0} not found")]
    ProductNotFound(ProductId),

    /// More units were requested than are in stock.
    #[error("Not enough stock for product {id}: requested {requested}, available {available}")]
    InsufficientStock {
        /// Product identifier
        id: ProductId,

        /// Units left in stock
        available: u32,

        /// Units requested
        requested: u32,
    },
}

/// The products on sale and their remaining stock.
///
/// Products keep the order they were supplied in. There is no way to add or
/// remove a product once the catalog is built, and stock only ever goes down.
#[derive(Debug)]
pub struct Catalog {
    products: SlotMap<ProductKey, Product>,
    index: FxHashMap<ProductId, ProductKey>,
    currency: &'static Currency,
}

impl Catalog {
    /// Builds a catalog from `products`, in order.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if there are no products, an identifier repeats,
    /// or the products are priced in more than one currency.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Result<Self, CatalogError> {
        let mut products = products.into_iter().peekable();

        let currency = products
            .peek()
            .map(Product::currency)
            .ok_or(CatalogError::NoProducts)?;

        let mut catalog = Catalog {
            products: SlotMap::with_key(),
            index: FxHashMap::default(),
            currency,
        };

        for product in products {
            let id = product.id;
            let product_currency = product.currency();

            if product_currency != currency {
                return Err(CatalogError::CurrencyMismatch {
                    id,
                    expected: currency.iso_alpha_code,
                    found: product_currency.iso_alpha_code,
                });
            }

            if catalog.index.contains_key(&id) {
                return Err(CatalogError::DuplicateProduct(id));
            }

            let key = catalog.products.insert(product);
            catalog.index.insert(id, key);
        }

        Ok(catalog)
    }

    /// Iterate over the products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Look up a product by identifier.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).and_then(|key| self.products.get(*key))
    }

    /// Look up a product by identifier, mutably.
    pub fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.index
            .get(&id)
            .and_then(|key| self.products.get_mut(*key))
    }

    /// Takes `quantity` units of product `id` out of stock, returning what is left.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::ProductNotFound`]: no product has this identifier.
    /// - [`CatalogError::InsufficientStock`]: fewer than `quantity` units are left; stock is unchanged.
    pub fn take_stock(&mut self, id: ProductId, quantity: u32) -> Result<u32, CatalogError> {
        let product = self.get_mut(id).ok_or(CatalogError::ProductNotFound(id))?;

        if !product.has_stock_for(quantity) {
            return Err(CatalogError::InsufficientStock {
                id,
                available: product.stock,
                requested: quantity,
            });
        }

        product.stock -= quantity;

        debug!(product_id = %id, quantity, remaining = product.stock, "took stock");

        Ok(product.stock)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Currency every product is priced in.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
