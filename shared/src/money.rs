//! 价格格式化
//!
//! Menu prices are decimals in currency unit; display always carries two
//! fractional digits.

use rust_decimal::{Decimal, RoundingStrategy};

/// Philippine peso sign, the symbol used by the reference deployment
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₱";

/// Format a price as a currency string
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shared::money::format_price;
///
/// assert_eq!(format_price(Decimal::new(1205, 1), "₱"), "₱120.50");
/// assert_eq!(format_price(Decimal::from(8), "€"), "€8.00");
/// ```
pub fn format_price(price: Decimal, symbol: &str) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{:.2}", symbol, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::new(1205, 1), "₱"), "₱120.50");
        assert_eq!(format_price(Decimal::ZERO, "₱"), "₱0.00");
        assert_eq!(format_price(Decimal::new(99999, 3), "₱"), "₱100.00");
        assert_eq!(format_price(Decimal::new(1234, 3), "$"), "$1.23");
        assert_eq!(format_price(Decimal::new(1235, 3), "$"), "$1.24");
    }
}
