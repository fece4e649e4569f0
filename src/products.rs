//! Products

use std::{fmt, num::NonZeroU32};

use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Customer-facing product identifier, as typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(NonZeroU32);

impl ProductId {
    /// Creates a product identifier, returning `None` for zero.
    pub fn new(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(Self)
    }

    /// Returns the numeric identifier.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl From<NonZeroU32> for ProductId {
    fn from(id: NonZeroU32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product held in the catalog, together with its remaining stock.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Unit price
    pub price: Money<'static, Currency>,

    /// Units left in stock
    pub stock: u32,
}

impl Product {
    /// Whether `quantity` units can be taken from stock.
    pub fn has_stock_for(&self, quantity: u32) -> bool {
        quantity <= self.stock
    }

    /// Currency of the unit price.
    pub fn currency(&self) -> &'static Currency {
        self.price.currency()
    }
}
