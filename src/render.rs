//! Render
//!
//! Text rendering of the catalog, the cart and the order history.

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::{
    cart::Cart,
    catalog::Catalog,
    orders::{Order, OrderLog},
};

const ORDER_SEPARATOR: &str = "------------------------------------------------------";

fn table(builder: Builder) -> String {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..4), Alignment::right());

    table.to_string()
}

/// The catalog as a table of id, name, price and remaining stock.
pub fn catalog_table(catalog: &Catalog) -> String {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Name", "Price", "Stock"]);

    for product in catalog.iter() {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.price.to_string(),
            product.stock.to_string(),
        ]);
    }

    format!("\nAvailable Products:\n{}\n", table(builder))
}

/// The cart lines as a table followed by the cart totals.
pub fn cart_table(cart: &Cart) -> String {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Name", "Price", "Quantity"]);

    for line in cart.lines() {
        builder.push_record([
            line.id().to_string(),
            line.name().to_string(),
            line.unit_price().to_string(),
            line.quantity().to_string(),
        ]);
    }

    format!(
        "\nShopping Cart:\n{}\nTotal Price: {}\nTotal Quantity: {}\n",
        table(builder),
        cart.total_price(),
        cart.total_quantity()
    )
}

fn order_block(order: &Order) -> String {
    let items = order
        .lines()
        .iter()
        .map(|line| format!("{} (x{})", line.name(), line.quantity()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Order ID: {}\nItems: {items}\nTotal Amount: {}\nStatus: {}\n{ORDER_SEPARATOR}\n",
        order.id(),
        order.total_amount(),
        order.status()
    )
}

/// Every order in the log, oldest first.
pub fn order_history(log: &OrderLog) -> String {
    let blocks: String = log.iter().map(order_block).collect();

    format!("\nOrder History:\n{ORDER_SEPARATOR}\n{blocks}")
}
