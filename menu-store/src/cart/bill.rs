//! Bill rendering
//!
//! Plain-text bill for the current cart: a header with the restaurant name,
//! one row per cart line and the grand total.

use super::aggregator::CartAggregator;
use super::error::CartError;
use crate::utils::money::{self, format_amount};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const CURRENCY_SYMBOL: &str = "₹";

/// Default bill width in characters (80mm thermal paper)
pub const DEFAULT_BILL_WIDTH: usize = 48;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillRow {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub restaurant_name: String,
    /// Milliseconds since epoch
    pub issued_at: i64,
    pub rows: Vec<BillRow>,
    pub total: f64,
}

impl Bill {
    /// Snapshot the cart into a bill. An empty cart has nothing to bill.
    pub fn from_cart(
        cart: &CartAggregator,
        restaurant_name: &str,
        issued_at: i64,
    ) -> Result<Self, CartError> {
        if cart.is_empty() {
            return Err(CartError::Empty);
        }

        let rows = cart
            .lines()
            .iter()
            .map(|line| BillRow {
                name: line.name.clone(),
                quantity: line.quantity,
                unit_price: line.price,
                amount: money::to_f64(money::line_total(line)),
            })
            .collect();

        Ok(Self {
            restaurant_name: restaurant_name.to_string(),
            issued_at,
            rows,
            total: cart.total(),
        })
    }

    /// Render as fixed-width text
    pub fn render(&self, width: usize) -> String {
        let mut out = Vec::new();

        out.push(center(&self.restaurant_name, width));
        if let Some(ts) = DateTime::from_timestamp_millis(self.issued_at) {
            let local = ts.with_timezone(&Local);
            out.push(center(&local.format("%Y-%m-%d %H:%M").to_string(), width));
        }
        out.push("=".repeat(width));

        for row in &self.rows {
            out.push(row.name.clone());
            out.push(line_lr(
                &format!(
                    "  {} x {} {}",
                    row.quantity,
                    CURRENCY_SYMBOL,
                    format_amount(row.unit_price)
                ),
                &format!("{} {}", CURRENCY_SYMBOL, format_amount(row.amount)),
                width,
            ));
        }

        out.push("-".repeat(width));
        out.push(line_lr(
            "Total:",
            &format!("{} {}", CURRENCY_SYMBOL, format_amount(self.total)),
            width,
        ));

        out.join("\n")
    }
}

/// Left and right text on one line, spaces filling the gap
fn line_lr(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    if used >= width {
        format!("{} {}", left, right)
    } else {
        format!("{}{}{}", left, " ".repeat(width - used), right)
    }
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((width - len) / 2), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Dish;

    fn sample_cart() -> CartAggregator {
        let mut cart = CartAggregator::default();
        let lassi = Dish::new("Lassi", 80.0, true);
        cart.add_to_cart(&lassi);
        cart.add_to_cart(&lassi);
        cart.add_to_cart(&Dish::new("Paneer Tikka", 120.0, true));
        cart
    }

    #[test]
    fn test_bill_rows_and_total() {
        let bill = Bill::from_cart(&sample_cart(), "Test Kitchen", 0).unwrap();

        assert_eq!(bill.rows.len(), 2);
        assert_eq!(bill.rows[0].amount, 160.0);
        assert_eq!(bill.rows[1].quantity, 1);
        assert_eq!(bill.total, 280.0);
    }

    #[test]
    fn test_empty_cart_has_no_bill() {
        assert_eq!(
            Bill::from_cart(&CartAggregator::default(), "Test Kitchen", 0),
            Err(CartError::Empty)
        );
    }

    #[test]
    fn test_render() {
        let bill = Bill::from_cart(&sample_cart(), "Test Kitchen", 0).unwrap();
        let text = bill.render(32);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0].trim(), "Test Kitchen");
        assert!(lines.contains(&"Lassi"));
        assert!(lines.contains(&"Paneer Tikka"));

        let last = *lines.last().unwrap();
        assert!(last.starts_with("Total:"));
        assert!(last.ends_with("₹ 280"));
        assert_eq!(last.chars().count(), 32);
    }

    #[test]
    fn test_line_lr_overflow() {
        assert_eq!(line_lr("abc", "def", 4), "abc def");
        assert_eq!(line_lr("ab", "cd", 6), "ab  cd");
    }
}
