//! Scripted sessions exercising the whole menu workflow.
//!
//! Each test feeds a fixed transcript of answers through a [`Terminal`] over an
//! in-memory buffer, runs the session to completion and inspects both the final
//! catalog/cart/order state and the text written back.

use std::io::Cursor;

use rusty_money::Money;
use testresult::TestResult;

use storefront::prelude::*;

type ScriptedSession = Session<Terminal<Cursor<Vec<u8>>, Vec<u8>>>;

fn session(script: &str) -> Result<ScriptedSession, FixtureError> {
    let terminal = Terminal::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());

    Ok(Session::new(terminal, default_catalog()?))
}

fn transcript(session: ScriptedSession) -> Result<String, std::string::FromUtf8Error> {
    String::from_utf8(session.into_console().into_output())
}

fn id(id: u32) -> Result<ProductId, &'static str> {
    ProductId::new(id).ok_or("zero product id")
}

fn stock(session: &ScriptedSession, product: u32) -> Result<u32, &'static str> {
    session
        .catalog()
        .get(id(product)?)
        .map(|product| product.stock)
        .ok_or("missing product")
}

#[test]
fn add_then_checkout_places_first_order() -> TestResult {
    // products, add 5 x product 1, done; cart, checkout; exit
    let mut session = session("1\ny\n1\n5\nn\n2\ny\n4\n")?;

    session.run()?;

    assert_eq!(stock(&session, 1)?, 49);
    assert!(session.cart().is_empty());
    assert_eq!(session.cart().total_quantity(), 0);

    let order = session.orders().last().ok_or("expected an order")?;
    let unit_price = session
        .catalog()
        .get(id(1)?)
        .map(|product| product.price)
        .ok_or("missing product")?;

    assert_eq!(order.id().get(), 1);
    assert_eq!(
        order.total_amount(),
        Money::from_minor(unit_price.to_minor_units() * 5, unit_price.currency())
    );
    assert_eq!(order.status(), OrderStatus::Completed);

    let output = transcript(session)?;
    assert!(output.contains("Product added successfully!"));
    assert!(output.contains("Updated stock for iPhone 13: 49 left."));
    assert!(output.contains("Total Quantity: 5"));
    assert!(output.contains("Checking out..."));
    assert!(output.contains("Order placed successfully! Order ID: 1"));
    assert!(output.ends_with("Exiting program. Thank you!\n"));

    Ok(())
}

#[test]
fn empty_cart_skips_checkout_prompt() -> TestResult {
    let mut session = session("2\n4\n")?;

    session.run()?;

    assert!(session.orders().is_empty());

    let output = transcript(session)?;
    assert!(output.contains("Shopping cart is empty."));
    assert!(!output.contains("checkout"), "checkout prompt shown for empty cart");

    Ok(())
}

#[test]
fn removing_unknown_cart_line_reports_not_found() -> TestResult {
    // add 1 x product 2; cart, no checkout, remove id 9; exit
    let mut session = session("1\ny\n2\n1\nn\n2\nn\ny\n9\n4\n")?;

    session.run()?;

    assert_eq!(session.cart().len(), 1);
    assert_eq!(session.cart().total_quantity(), 1);
    assert!(session.orders().is_empty());

    let output = transcript(session)?;
    assert!(output.contains("Product ID not found in the cart."));

    Ok(())
}

#[test]
fn removing_cart_line_updates_totals() -> TestResult {
    // add 2 x product 3 and 1 x product 4; cart, no checkout, remove id 3; exit
    let mut session = session("1\ny\n3\n2\ny\ny\n4\n1\nn\n2\nn\ny\n3\n4\n")?;

    session.run()?;

    let cart = session.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.total_quantity(), 1);
    assert_eq!(cart.total_price(), total_price(cart.lines())?);
    assert_eq!(cart.lines().first().map(CartLine::id), Some(id(4)?));

    // Removing from the cart never restocks the catalog.
    assert_eq!(stock(&session, 3)?, 59);

    let output = transcript(session)?;
    assert!(output.contains("Product removed successfully!"));

    Ok(())
}

#[test]
fn insufficient_stock_ends_browsing() -> TestResult {
    // product 5 has 9 in stock; ask for 10, then exit straight from the menu
    let mut session = session("1\ny\n5\n10\n4\n")?;

    session.run()?;

    assert_eq!(stock(&session, 5)?, 9);
    assert!(session.cart().is_empty());

    let output = transcript(session)?;
    assert!(output.contains("Not enough stock available! Only 9 left."));
    assert!(!output.contains("add another product"), "browsing continued");
    assert!(output.ends_with("Exiting program. Thank you!\n"));

    Ok(())
}

#[test]
fn insufficient_stock_can_continue_browsing() -> TestResult {
    let mut session =
        session("1\ny\n5\n10\ny\ny\n5\n9\nn\n4\n")?.with_shortfall_policy(ShortfallPolicy::Continue);

    session.run()?;

    assert_eq!(stock(&session, 5)?, 0);
    assert_eq!(session.cart().total_quantity(), 9);

    let output = transcript(session)?;
    assert!(output.contains("Not enough stock available! Only 9 left."));
    assert!(output.contains("Updated stock for iPad 10th Gen: 0 left."));

    Ok(())
}

#[test]
fn browse_products_reports_shortfall_outcome() -> TestResult {
    let mut session = session("y\n6\n7\n")?;

    assert_eq!(session.browse_products()?, BrowseOutcome::StockShortfall);
    assert_eq!(stock(&session, 6)?, 6);

    Ok(())
}

#[test]
fn unknown_catalog_id_does_not_ask_for_quantity() -> TestResult {
    let mut session = session("1\ny\n42\nn\n4\n")?;

    session.run()?;

    assert!(session.cart().is_empty());

    let output = transcript(session)?;
    assert!(output.contains("Product ID not found in the catalog."));
    assert!(!output.contains("Enter quantity"), "asked for quantity");

    Ok(())
}

#[test]
fn order_ids_increase_across_checkouts() -> TestResult {
    // two separate add/checkout rounds, then view orders
    let mut session = session("1\ny\n1\n1\nn\n2\ny\n1\ny\n6\n2\nn\n2\ny\n3\n4\n")?;

    session.run()?;

    let ids: Vec<u32> = session.orders().iter().map(|o| o.id().get()).collect();
    assert_eq!(ids, vec![1, 2]);

    let output = transcript(session)?;
    assert!(output.contains("Order placed successfully! Order ID: 2"));
    assert!(output.contains("Order History:"));
    assert!(output.contains("Items: iPhone 13 (x1)"));
    assert!(output.contains("Items: iPad 9th Gen (x2)"));

    Ok(())
}

#[test]
fn no_orders_message_before_first_checkout() -> TestResult {
    let mut session = session("3\n4\n")?;

    session.run()?;

    let output = transcript(session)?;
    assert!(output.contains("No orders have been placed yet."));

    Ok(())
}

#[test]
fn invalid_menu_input_is_reprompted() -> TestResult {
    let mut session = session("9\nabc\n4\n")?;

    session.run()?;

    let output = transcript(session)?;
    assert_eq!(output.matches("Invalid choice! Please try again.").count(), 1);
    assert_eq!(
        output
            .matches("Invalid input! Please enter a whole number: ")
            .count(),
        1
    );
    assert_eq!(output.matches("\nMenu:\n").count(), 2);

    Ok(())
}

#[test]
fn end_of_input_exits_cleanly() -> TestResult {
    let mut session = session("1\ny\n")?;

    session.run()?;

    assert!(session.cart().is_empty());

    let output = transcript(session)?;
    assert!(output.ends_with("Exiting program. Thank you!\n"));

    Ok(())
}
