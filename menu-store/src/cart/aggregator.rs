//! Cart Aggregator - cart lines and running total
//!
//! A line exists only with `quantity >= 1`; decreasing from 1 removes it.
//! There is at most one line per dish id. Quantities saturate at `u32::MAX`.

use super::error::CartError;
use crate::utils::money;
use shared::models::{CartLine, Dish};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartAggregator {
    lines: Vec<CartLine>,
}

impl CartAggregator {
    /// Build from stored lines, repairing records that break the invariants:
    /// zero-quantity lines are dropped and repeated ids are merged into the
    /// first occurrence.
    pub fn new(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::default();
        cart.replace_lines(lines);
        cart
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, line_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == line_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, l| count.saturating_add(l.quantity))
    }

    /// Sum of `price * quantity`; exactly 0 for an empty cart
    pub fn total(&self) -> f64 {
        money::lines_total(&self.lines)
    }

    /// Add one unit of `dish`, returning the line's new quantity
    pub fn add_to_cart(&mut self, dish: &Dish) -> u32 {
        match self.lines.iter_mut().find(|l| l.id == dish.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                line.quantity
            }
            None => {
                self.lines.push(CartLine::from_dish(dish));
                1
            }
        }
    }

    pub fn increase_quantity(&mut self, line_id: &str) -> Result<u32, CartError> {
        let line = self.line_mut(line_id)?;
        line.quantity = line.quantity.saturating_add(1);
        Ok(line.quantity)
    }

    /// Returns the remaining quantity, or `None` when the line was removed
    pub fn decrease_quantity(&mut self, line_id: &str) -> Result<Option<u32>, CartError> {
        let line = self.line_mut(line_id)?;
        if line.quantity > 1 {
            line.quantity -= 1;
            return Ok(Some(line.quantity));
        }
        self.remove_line(line_id);
        Ok(None)
    }

    /// Delete a line regardless of quantity; unknown ids are a no-op
    pub fn remove_line(&mut self, line_id: &str) -> Option<CartLine> {
        let position = self.lines.iter().position(|l| l.id == line_id)?;
        Some(self.lines.remove(position))
    }

    /// Empty the cart, returning how many lines were dropped
    pub fn clear(&mut self) -> usize {
        let count = self.lines.len();
        self.lines.clear();
        count
    }

    pub fn replace_lines(&mut self, lines: Vec<CartLine>) {
        let mut repaired: Vec<CartLine> = Vec::with_capacity(lines.len());
        for line in lines {
            if line.quantity == 0 {
                tracing::warn!(line_id = %line.id, "Dropping zero-quantity cart line");
                continue;
            }
            match repaired.iter_mut().find(|l| l.id == line.id) {
                Some(existing) => {
                    tracing::warn!(line_id = %line.id, "Merging duplicate cart line");
                    existing.quantity = match existing.quantity.checked_add(line.quantity) {
                        Some(quantity) => quantity,
                        None => {
                            tracing::warn!(line_id = %line.id, "Cart line quantity clamped");
                            u32::MAX
                        }
                    };
                }
                None => repaired.push(line),
            }
        }
        self.lines = repaired;
    }

    fn line_mut(&mut self, line_id: &str) -> Result<&mut CartLine, CartError> {
        self.lines
            .iter_mut()
            .find(|l| l.id == line_id)
            .ok_or_else(|| CartError::LineNotFound(line_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(name: &str, price: f64) -> Dish {
        Dish::new(name, price, true)
    }

    #[test]
    fn test_add_same_dish_n_times() {
        let mut cart = CartAggregator::default();
        let lassi = dish("Lassi", 80.0);

        for expected in 1..=5 {
            assert_eq!(cart.add_to_cart(&lassi), expected);
        }
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line("lassi").unwrap().quantity, 5);

        for _ in 0..4 {
            assert!(cart.decrease_quantity("lassi").unwrap().is_some());
        }
        assert_eq!(cart.decrease_quantity("lassi").unwrap(), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increment_keeps_position() {
        let mut cart = CartAggregator::default();
        cart.add_to_cart(&dish("Samosa", 40.0));
        cart.add_to_cart(&dish("Lassi", 80.0));
        cart.add_to_cart(&dish("Samosa", 40.0));
        cart.add_to_cart(&dish("Jalebi", 40.0));

        let ids: Vec<_> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["samosa", "lassi", "jalebi"]);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_total() {
        let mut cart = CartAggregator::default();
        assert_eq!(cart.total(), 0.0);

        let lassi = dish("Lassi", 80.0);
        cart.add_to_cart(&lassi);
        cart.add_to_cart(&lassi);
        cart.add_to_cart(&dish("Paneer Tikka", 120.0));

        assert_eq!(cart.total(), 280.0);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_increase_and_missing_lines() {
        let mut cart = CartAggregator::default();
        cart.add_to_cart(&dish("Biryani", 250.0));

        assert_eq!(cart.increase_quantity("biryani"), Ok(2));
        assert_eq!(
            cart.increase_quantity("kulfi"),
            Err(CartError::LineNotFound("kulfi".into()))
        );
        assert_eq!(
            cart.decrease_quantity("kulfi"),
            Err(CartError::LineNotFound("kulfi".into()))
        );
    }

    #[test]
    fn test_remove_line_ignores_quantity() {
        let mut cart = CartAggregator::default();
        let chai = dish("Masala Chai", 30.0);
        for _ in 0..3 {
            cart.add_to_cart(&chai);
        }

        let removed = cart.remove_line("masala_chai").unwrap();
        assert_eq!(removed.quantity, 3);
        assert!(cart.remove_line("masala_chai").is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = CartAggregator::default();
        cart.add_to_cart(&dish("Samosa", 40.0));
        cart.add_to_cart(&dish("Lassi", 80.0));

        assert_eq!(cart.clear(), 2);
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_new_repairs_stored_lines() {
        let line = |id: &str, quantity| CartLine {
            id: id.to_string(),
            name: id.to_string(),
            price: 10.0,
            is_veg: true,
            quantity,
        };
        let cart = CartAggregator::new(vec![
            line("a", 1),
            line("b", 0),
            line("c", 2),
            line("a", 3),
        ]);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.line("a").unwrap().quantity, 4);
        assert!(cart.line("b").is_none());
        assert_eq!(cart.lines()[1].id, "c");
    }

    #[test]
    fn test_merge_clamps_quantity_overflow() {
        let line = |quantity| CartLine {
            quantity,
            ..CartLine::from_dish(&dish("Lassi", 80.0))
        };
        let cart = CartAggregator::new(vec![line(u32::MAX), line(1)]);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line("lassi").unwrap().quantity, u32::MAX);
    }

    #[test]
    fn test_increment_saturates() {
        let lassi = dish("Lassi", 80.0);
        let mut cart = CartAggregator::new(vec![CartLine {
            quantity: u32::MAX,
            ..CartLine::from_dish(&lassi)
        }]);

        assert_eq!(cart.add_to_cart(&lassi), u32::MAX);
        assert_eq!(cart.increase_quantity("lassi"), Ok(u32::MAX));
        cart.add_to_cart(&dish("Samosa", 40.0));
        assert_eq!(cart.item_count(), u32::MAX);
        assert_eq!(cart.decrease_quantity("lassi"), Ok(Some(u32::MAX - 1)));
    }

    #[test]
    fn test_total_keeps_sub_cent_price() {
        let mut cart = CartAggregator::default();
        cart.add_to_cart(&dish("Mint", 0.004));
        assert_eq!(cart.total(), 0.004);
    }
}
