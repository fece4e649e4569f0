//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine},
    catalog::{Catalog, CatalogError},
    config::{LogFormat, LoggingConfig, ShortfallPolicy, StorefrontConfig},
    console::{Console, ConsoleError, InputError, Terminal, YesNo, read_positive_integer, read_yes_no},
    fixtures::{FixtureError, default_catalog},
    orders::{Order, OrderId, OrderLog, OrderStatus},
    pricing::{PricingError, line_total, total_price},
    products::{Product, ProductId, ProductKey},
    session::{BrowseOutcome, MenuChoice, Screen, Session, SessionError},
};
