//! Decimal parsing and fixed-precision display.
//!
//! All volume, price and cost arithmetic runs on `rust_decimal::Decimal` so
//! that the receipt check and the report totals never pick up binary
//! floating-point noise. Display rounds half away from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// Parses a trimmed decimal field.
pub fn parse_decimal(s: &str) -> std::result::Result<Decimal, rust_decimal::Error> {
    Decimal::from_str(s.trim())
}

/// Rounds `value` to exactly `places` decimal places.
pub fn round_to(value: Decimal, places: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    rounded
}

/// Display adapter printing a decimal with a fixed number of places.
///
/// Honours width and alignment flags, so `format!("{:>6}", Fixed::new(v, 3))`
/// lines up in a column the same way a float would.
///
/// # Examples
///
/// ```
/// use gas_mileage::decimal::{parse_decimal, Fixed};
///
/// let gallons = parse_decimal("8.7").unwrap();
/// assert_eq!(format!("{:>6}", Fixed::new(gallons, 3)), " 8.700");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed {
    value: Decimal,
    places: u32,
}

impl Fixed {
    pub fn new(value: Decimal, places: u32) -> Self {
        Fixed { value, places }
    }

    /// Three places, used for gallons and price per gallon.
    pub fn volume(value: Decimal) -> Self {
        Self::new(value, 3)
    }

    /// Two places, used for money and MPG.
    pub fn money(value: Decimal) -> Self {
        Self::new(value, 2)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&round_to(self.value, self.places).to_string())
    }
}
