//! Orders

use std::fmt;

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use tracing::info;

use crate::cart::CartLine;

/// Order identifier, unique for the lifetime of an [`OrderLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(u32);

impl OrderId {
    /// Returns the numeric identifier.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Checked out and paid for.
    Completed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Completed => f.write_str("Completed"),
        }
    }
}

/// A checked out cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    lines: SmallVec<[CartLine; 4]>,
    total_amount: Money<'static, Currency>,
    status: OrderStatus,
}

impl Order {
    /// Order identifier
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Lines as they were in the cart at checkout.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Amount charged for the order
    pub fn total_amount(&self) -> Money<'static, Currency> {
        self.total_amount
    }

    /// Order status
    pub fn status(&self) -> OrderStatus {
        self.status
    }
}

/// Append-only history of placed orders.
///
/// Owns the identifier counter: the first order recorded is `1` and every later
/// order gets the next number, so identifiers are strictly increasing.
#[derive(Debug, Default)]
pub struct OrderLog {
    orders: Vec<Order>,
    last_id: u32,
}

impl OrderLog {
    /// Create an empty order log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed order for `lines` and returns its identifier.
    pub fn record(
        &mut self,
        lines: SmallVec<[CartLine; 4]>,
        total_amount: Money<'static, Currency>,
    ) -> OrderId {
        self.last_id += 1;

        let id = OrderId(self.last_id);

        info!(order_id = %id, total = %total_amount, lines = lines.len(), "order placed");

        self.orders.push(Order {
            id,
            lines,
            total_amount,
            status: OrderStatus::Completed,
        });

        id
    }

    /// Every order, oldest first.
    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    /// Iterate over the orders, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// The most recently recorded order.
    pub fn last(&self) -> Option<&Order> {
        self.orders.last()
    }

    /// Number of orders recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if no order has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
