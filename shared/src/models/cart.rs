//! Cart Model

use super::dish::Dish;
use serde::{Deserialize, Serialize};

/// One dish in the active order
///
/// Carries its own copy of the dish fields taken when it was added, so the
/// line stays billable after the dish is edited or removed from the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Id of the source dish
    pub id: String,
    pub name: String,
    pub price: f64,
    pub is_veg: bool,
    /// Always >= 1 while the line exists
    pub quantity: u32,
}

impl CartLine {
    pub fn from_dish(dish: &Dish) -> Self {
        Self {
            id: dish.id.clone(),
            name: dish.name.clone(),
            price: dish.price,
            is_veg: dish.is_veg,
            quantity: 1,
        }
    }
}
