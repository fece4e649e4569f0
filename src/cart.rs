//! Cart

use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use crate::{
    orders::{OrderId, OrderLog},
    pricing::{PricingError, line_total},
    products::{Product, ProductId},
};

/// Errors related to cart changes.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// A product's currency differs from the cart currency (product, product currency, cart currency).
    #[error("Product {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),

    /// Zero units of a product were requested.
    #[error("Quantity for product {0} must be at least 1")]
    ZeroQuantity(ProductId),

    /// No line for the product is in the cart.
    #[error("Product {0} not found in the cart")]
    ItemNotFound(ProductId),

    /// Checkout was requested with nothing in the cart.
    #[error("Cannot check out an empty cart")]
    Empty,

    /// Error pricing a line.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl From<MoneyError> for CartError {
    fn from(err: MoneyError) -> Self {
        CartError::Pricing(PricingError::Money(err))
    }
}

/// A product and quantity chosen for purchase.
///
/// Name and unit price are captured when the line is created, so later catalog
/// changes never alter a cart or a placed order.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    id: ProductId,
    name: String,
    unit_price: Money<'static, Currency>,
    quantity: u32,
}

impl CartLine {
    /// Creates a new cart line.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        unit_price: Money<'static, Currency>,
        quantity: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Product identifier.
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Product name at the time the line was added.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price at the time the line was added.
    pub fn unit_price(&self) -> Money<'static, Currency> {
        self.unit_price
    }

    /// Units of the product in this line.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price of the whole line.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the line total overflows.
    pub fn total(&self) -> Result<Money<'static, Currency>, PricingError> {
        line_total(self.unit_price, self.quantity)
    }
}

/// Cart
#[derive(Debug)]
pub struct Cart {
    lines: Vec<CartLine>,
    total_price: Money<'static, Currency>,
    total_quantity: u64,
    currency: &'static Currency,
}

impl Cart {
    /// Create a new, empty cart.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            lines: Vec::new(),
            total_price: Money::from_minor(0, currency),
            total_quantity: 0,
            currency,
        }
    }

    /// Adds `quantity` units of `product` as a new line.
    ///
    /// Stock is not checked here; callers reserve stock in the catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the quantity is zero, the product is priced in another
    /// currency, or the line total cannot be calculated.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity(product.id));
        }

        let product_currency = product.currency();

        if product_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                product.id,
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        let line = CartLine::new(product.id, product.name.clone(), product.price, quantity);

        self.total_price = self.total_price.add(line.total()?)?;
        self.total_quantity += u64::from(quantity);

        debug!(
            product_id = %line.id,
            quantity,
            total_quantity = self.total_quantity,
            "added line to cart"
        );

        self.lines.push(line);

        Ok(())
    }

    /// Removes the first line for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] if no line matches; the cart is left unchanged.
    pub fn remove_item(&mut self, id: ProductId) -> Result<CartLine, CartError> {
        let (position, line) = self
            .lines
            .iter()
            .enumerate()
            .find(|(_, line)| line.id == id)
            .ok_or(CartError::ItemNotFound(id))?;

        let total_price = self.total_price.sub(line.total()?)?;

        let line = self.lines.remove(position);

        self.total_price = total_price;
        self.total_quantity -= u64::from(line.quantity);

        debug!(product_id = %id, quantity = line.quantity, "removed line from cart");

        Ok(line)
    }

    /// Turns the cart into a completed order in `log` and empties the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Empty`] if there is nothing to check out.
    pub fn checkout(&mut self, log: &mut OrderLog) -> Result<OrderId, CartError> {
        if self.is_empty() {
            return Err(CartError::Empty);
        }

        let lines: SmallVec<[CartLine; 4]> = self.lines.drain(..).collect();
        let id = log.record(lines, self.total_price);

        self.clear();

        Ok(id)
    }

    /// Removes every line and resets the totals.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.total_price = Money::from_minor(0, self.currency);
        self.total_quantity = 0;
    }

    /// Lines in the order they were added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of every line's price.
    pub fn total_price(&self) -> Money<'static, Currency> {
        self.total_price
    }

    /// Sum of every line's quantity.
    pub fn total_quantity(&self) -> u64 {
        self.total_quantity
    }

    /// Get the number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
