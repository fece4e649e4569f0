//! Session
//!
//! The interactive workflow: a menu dispatcher that moves between screens for browsing
//! products, reviewing the cart and listing past orders.

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    cart::{Cart, CartError},
    catalog::{Catalog, CatalogError},
    config::ShortfallPolicy,
    console::{Console, ConsoleError, InputError, read_positive_integer, read_yes_no},
    orders::OrderLog,
    products::ProductId,
    render::{cart_table, catalog_table, order_history},
};

const MENU: &str = "\nMenu:\n1. View Products\n2. View Shopping Cart\n3. View Orders\n4. Exit\nEnter your choice: ";
const FAREWELL: &str = "Exiting program. Thank you!\n";

/// Errors that end a session early.
///
/// Mistakes in what the user types are handled inside the session and never
/// surface here.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing the console failed.
    #[error(transparent)]
    Console(#[from] ConsoleError),

    /// Reading validated input failed.
    #[error(transparent)]
    Input(#[from] InputError),

    /// A cart change failed.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// A catalog change failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Screens the session moves between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The main menu.
    Menu,

    /// The catalog and the add-to-cart loop.
    Products,

    /// The cart, with checkout and remove.
    Cart,

    /// The order history.
    Orders,

    /// The session is over.
    Exit,
}

/// An entry on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1. View Products
    ViewProducts,

    /// 2. View Shopping Cart
    ViewCart,

    /// 3. View Orders
    ViewOrders,

    /// 4. Exit
    Exit,
}

impl TryFrom<u32> for MenuChoice {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::ViewProducts),
            2 => Ok(MenuChoice::ViewCart),
            3 => Ok(MenuChoice::ViewOrders),
            4 => Ok(MenuChoice::Exit),
            other => Err(other),
        }
    }
}

impl From<MenuChoice> for Screen {
    fn from(choice: MenuChoice) -> Self {
        match choice {
            MenuChoice::ViewProducts => Screen::Products,
            MenuChoice::ViewCart => Screen::Cart,
            MenuChoice::ViewOrders => Screen::Orders,
            MenuChoice::Exit => Screen::Exit,
        }
    }
}

/// How a product browsing visit ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseOutcome {
    /// The user declined to add (another) product.
    Finished,

    /// A requested quantity exceeded stock under [`ShortfallPolicy::EndBrowsing`].
    StockShortfall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AddOutcome {
    Added,
    UnknownProduct,
    StockShortfall,
}

/// A single user's shopping session.
#[derive(Debug)]
pub struct Session<C> {
    console: C,
    catalog: Catalog,
    cart: Cart,
    orders: OrderLog,
    shortfall: ShortfallPolicy,
}

impl<C: Console> Session<C> {
    /// Start a session over `catalog` with an empty cart and no orders.
    pub fn new(console: C, catalog: Catalog) -> Self {
        let cart = Cart::new(catalog.currency());

        Self {
            console,
            catalog,
            cart,
            orders: OrderLog::new(),
            shortfall: ShortfallPolicy::default(),
        }
    }

    /// Set what happens when a requested quantity exceeds stock.
    #[must_use]
    pub fn with_shortfall_policy(mut self, policy: ShortfallPolicy) -> Self {
        self.shortfall = policy;
        self
    }

    /// Run from the main menu until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the console fails.
    pub fn run(&mut self) -> Result<(), SessionError> {
        let mut screen = Screen::Menu;

        while screen != Screen::Exit {
            screen = self.step(screen)?;
        }

        Ok(())
    }

    /// Show `screen` and return the screen to show next.
    ///
    /// Running out of input on any screen ends the session.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the console fails.
    pub fn step(&mut self, screen: Screen) -> Result<Screen, SessionError> {
        let next = match screen {
            Screen::Menu => self.menu(),
            Screen::Products => self.browse_products().map(|_| Screen::Menu),
            Screen::Cart => self.view_cart().map(|()| Screen::Menu),
            Screen::Orders => self.view_orders().map(|()| Screen::Menu),
            Screen::Exit => Ok(Screen::Exit),
        };

        match next {
            Err(SessionError::Input(InputError::EndOfInput)) => {
                info!(?screen, "input closed");
                self.console.write("\n")?;
                self.console.write(FAREWELL)?;

                Ok(Screen::Exit)
            }
            Err(SessionError::Input(InputError::Console(err))) => Err(err.into()),
            other => other,
        }
    }

    fn menu(&mut self) -> Result<Screen, SessionError> {
        self.console.write(MENU)?;

        let choice = read_positive_integer(&mut self.console)?.get();

        match MenuChoice::try_from(choice) {
            Ok(MenuChoice::Exit) => {
                self.console.write(FAREWELL)?;

                Ok(Screen::Exit)
            }
            Ok(choice) => Ok(choice.into()),
            Err(choice) => {
                debug!(choice, "invalid menu choice");
                self.console.write("Invalid choice! Please try again.\n")?;

                Ok(Screen::Menu)
            }
        }
    }

    /// Show the catalog and add products to the cart until the user is done.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the console fails or input ends.
    pub fn browse_products(&mut self) -> Result<BrowseOutcome, SessionError> {
        loop {
            self.console.write(&catalog_table(&self.catalog))?;
            self.console
                .write("\nWould you like to add a product to your cart? (Y/N): ")?;

            if !read_yes_no(&mut self.console)?.is_yes() {
                return Ok(BrowseOutcome::Finished);
            }

            self.console.write("Enter the product ID to add to cart: ")?;

            let id = ProductId::from(read_positive_integer(&mut self.console)?);

            if self.add_to_cart(id)? == AddOutcome::StockShortfall
                && self.shortfall == ShortfallPolicy::EndBrowsing
            {
                return Ok(BrowseOutcome::StockShortfall);
            }

            self.console
                .write("\nWould you like to add another product? (Y/N): ")?;

            if !read_yes_no(&mut self.console)?.is_yes() {
                return Ok(BrowseOutcome::Finished);
            }
        }
    }

    fn add_to_cart(&mut self, id: ProductId) -> Result<AddOutcome, SessionError> {
        let Some(product) = self.catalog.get(id) else {
            debug!(product_id = %id, "product not in catalog");
            self.console.write("Product ID not found in the catalog.\n")?;

            return Ok(AddOutcome::UnknownProduct);
        };

        self.console.write("Enter quantity: ")?;

        let quantity = read_positive_integer(&mut self.console)?.get();

        if !product.has_stock_for(quantity) {
            info!(
                product_id = %id,
                requested = quantity,
                available = product.stock,
                "insufficient stock"
            );
            self.console.write(&format!(
                "Not enough stock available! Only {} left.\n",
                product.stock
            ))?;

            return Ok(AddOutcome::StockShortfall);
        }

        self.cart.add_item(product, quantity)?;

        let name = product.name.clone();
        let remaining = self.catalog.take_stock(id, quantity)?;

        self.console.write("Product added successfully!\n")?;
        self.console
            .write(&format!("Updated stock for {name}: {remaining} left.\n"))?;

        Ok(AddOutcome::Added)
    }

    /// Show the cart, then offer checkout or removing a line.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the console fails or input ends.
    pub fn view_cart(&mut self) -> Result<(), SessionError> {
        if self.cart.is_empty() {
            self.console.write("Shopping cart is empty.\n")?;

            return Ok(());
        }

        self.console.write(&cart_table(&self.cart))?;
        self.console.write("\nDo you want to checkout? (Y/N): ")?;

        if read_yes_no(&mut self.console)?.is_yes() {
            self.console.write("Checking out...\n")?;

            let order_id = self.cart.checkout(&mut self.orders)?;

            self.console
                .write(&format!("Order placed successfully! Order ID: {order_id}\n"))?;

            return Ok(());
        }

        self.console
            .write("\nWould you like to remove a product from your cart? (Y/N): ")?;

        if !read_yes_no(&mut self.console)?.is_yes() {
            return Ok(());
        }

        self.console.write("Enter the product ID to remove: ")?;

        let id = ProductId::from(read_positive_integer(&mut self.console)?);

        match self.cart.remove_item(id) {
            Ok(_) => self.console.write("Product removed successfully!\n")?,
            Err(CartError::ItemNotFound(_)) => {
                debug!(product_id = %id, "product not in cart");
                self.console.write("Product ID not found in the cart.\n")?;
            }
            Err(err) => return Err(err.into()),
        }

        Ok(())
    }

    /// List every placed order, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the console fails.
    pub fn view_orders(&mut self) -> Result<(), SessionError> {
        if self.orders.is_empty() {
            self.console.write("No orders have been placed yet.\n")?;

            return Ok(());
        }

        self.console.write(&order_history(&self.orders))?;

        Ok(())
    }

    /// The catalog, with stock as it stands.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Orders placed so far.
    pub fn orders(&self) -> &OrderLog {
        &self.orders
    }

    /// End the session, handing back the console.
    pub fn into_console(self) -> C {
        self.console
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices_map_to_screens() {
        let screens: Vec<Result<Screen, u32>> = (0..=5)
            .map(|n| MenuChoice::try_from(n).map(Screen::from))
            .collect();

        assert_eq!(
            screens,
            vec![
                Err(0),
                Ok(Screen::Products),
                Ok(Screen::Cart),
                Ok(Screen::Orders),
                Ok(Screen::Exit),
                Err(5),
            ]
        );
    }
}
