//! Dish Model

use crate::util::slugify;
use serde::{Deserialize, Serialize};

/// Dish entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    /// Slug of `name`, unique within the owning category
    pub id: String,
    pub name: String,
    /// Price in whole currency units
    pub price: f64,
    pub is_veg: bool,
}

impl Dish {
    /// Build a dish whose id is derived from its name
    pub fn new(name: impl Into<String>, price: f64, is_veg: bool) -> Self {
        let name = name.into().trim().to_string();
        Self {
            id: slugify(&name),
            name,
            price,
            is_veg,
        }
    }
}

/// Update dish payload
///
/// Absent fields keep the current value. Changing `name` changes the id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub is_veg: Option<bool>,
}

impl DishUpdate {
    /// Apply the update on top of `dish`, producing the replacement dish
    pub fn apply_to(&self, dish: &Dish) -> Dish {
        Dish::new(
            self.name.clone().unwrap_or_else(|| dish.name.clone()),
            self.price.unwrap_or(dish.price),
            self.is_veg.unwrap_or(dish.is_veg),
        )
    }
}
