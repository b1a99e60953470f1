//! Money calculation utilities using rust_decimal for precision
//!
//! Prices are stored as `f64` in the records. Sums are done in `Decimal`
//! and converted back so repeated additions do not drift. Totals keep full
//! precision; only [`format_amount`] rounds, for display.

use rust_decimal::prelude::*;
use shared::models::CartLine;

/// Display precision for amounts (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// `price * quantity` for one line
pub fn line_total(line: &CartLine) -> Decimal {
    to_decimal(line.price) * Decimal::from(line.quantity)
}

/// Sum of all line totals, 0 for an empty slice
pub fn lines_total(lines: &[CartLine]) -> f64 {
    to_f64(lines.iter().map(line_total).sum())
}

/// Render an amount without trailing zeros: `280`, `12.5`
pub fn format_amount(value: f64) -> String {
    to_decimal(value)
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price: f64, quantity: u32) -> CartLine {
        CartLine {
            id: id.to_string(),
            name: id.to_string(),
            price,
            is_veg: true,
            quantity,
        }
    }

    #[test]
    fn test_lines_total() {
        let lines = vec![line("lassi", 80.0, 2), line("paneer_tikka", 120.0, 1)];
        assert_eq!(lines_total(&lines), 280.0);
        assert_eq!(lines_total(&[]), 0.0);
    }

    #[test]
    fn test_no_float_drift() {
        let lines = vec![line("a", 0.1, 3), line("b", 0.2, 1)];
        assert_eq!(lines_total(&lines), 0.5);
    }

    #[test]
    fn test_total_keeps_sub_cent_prices() {
        assert_eq!(lines_total(&[line("mint", 0.004, 1)]), 0.004);
        assert_eq!(lines_total(&[line("mint", 0.004, 3)]), 0.012);
        assert_eq!(lines_total(&[line("a", 12.345, 2), line("b", 0.005, 1)]), 24.695);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(280.0), "280");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(0.004), "0");
        assert_eq!(format_amount(24.695), "24.7");
    }
}
