//! Storefront
//!
//! A single-user, in-memory shopping workflow: browse a fixed catalog, fill a cart,
//! check it out into an order history and review past orders, all driven through a
//! line-oriented console.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod console;
pub mod fixtures;
pub mod observability;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod render;
pub mod session;
