//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::cart::CartLine;

/// Errors that can occur while calculating prices.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// No lines were provided, so currency could not be determined.
    #[error("no lines provided; cannot determine currency")]
    NoLines,

    /// Multiplying a unit price by a quantity overflowed.
    #[error("price of {quantity} x {unit_price} overflows")]
    Overflow {
        /// Unit price in minor units
        unit_price: i64,

        /// Requested quantity
        quantity: u32,
    },

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates `quantity` units at `unit_price`.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the result does not fit in minor units.
pub fn line_total(
    unit_price: Money<'static, Currency>,
    quantity: u32,
) -> Result<Money<'static, Currency>, PricingError> {
    let minor = unit_price.to_minor_units();

    let total = minor
        .checked_mul(i64::from(quantity))
        .ok_or(PricingError::Overflow {
            unit_price: minor,
            quantity,
        })?;

    Ok(Money::from_minor(total, unit_price.currency()))
}

/// Calculates the total price of a list of cart lines
///
/// # Errors
///
/// - [`PricingError::NoLines`]: No lines were provided, so currency could not be determined.
/// - [`PricingError::Overflow`]: A line total overflowed.
/// - [`PricingError::Money`]: Wrapped money arithmetic or currency mismatch error.
pub fn total_price(lines: &[CartLine]) -> Result<Money<'static, Currency>, PricingError> {
    let first = lines.first().ok_or(PricingError::NoLines)?;

    lines.iter().try_fold(
        Money::from_minor(0, first.unit_price().currency()),
        |acc, line| Ok(acc.add(line.total()?)?),
    )
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, THB};
    use testresult::TestResult;

    use crate::products::ProductId;

    use super::*;

    fn line(id: u32, price: i64, quantity: u32) -> Result<CartLine, &'static str> {
        let id = ProductId::new(id).ok_or("zero product id")?;

        Ok(CartLine::new(
            id,
            format!("Product {id}"),
            Money::from_minor(price, THB),
            quantity,
        ))
    }

    #[test]
    fn line_total_multiplies_minor_units() -> TestResult {
        let total = line_total(Money::from_minor(2_689_000, THB), 5)?;

        assert_eq!(total, Money::from_minor(13_445_000, THB));

        Ok(())
    }

    #[test]
    fn line_total_reports_overflow() {
        let result = line_total(Money::from_minor(i64::MAX, GBP), 2);

        assert_eq!(
            result,
            Err(PricingError::Overflow {
                unit_price: i64::MAX,
                quantity: 2,
            })
        );
    }

    #[test]
    fn test_total_price() -> TestResult {
        let lines = [line(1, 100, 2)?, line(2, 250, 1)?];

        assert_eq!(total_price(&lines)?, Money::from_minor(450, THB));

        Ok(())
    }

    #[test]
    fn test_total_price_empty() {
        assert!(matches!(total_price(&[]), Err(PricingError::NoLines)));
    }
}
