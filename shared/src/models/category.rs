//! Category Model

use super::dish::Dish;
use crate::util::slugify;
use serde::{Deserialize, Serialize};

/// Ordered list of categories, the whole menu
pub type Catalog = Vec<Category>;

/// Category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Slug of the display name, unique within the catalog
    pub id: String,
    /// Display name
    pub category: String,
    /// Opaque image reference: bundled asset name or an uploaded data URI
    pub icon: String,
    /// Whether `icon` came from the image picker rather than the bundle
    #[serde(default)]
    pub is_icon_uploaded: bool,
    /// Insertion-ordered dishes
    #[serde(default)]
    pub dishes: Vec<Dish>,
}

impl Category {
    /// Build an empty category whose id is derived from its name
    pub fn new(name: impl Into<String>, icon: impl Into<String>, is_icon_uploaded: bool) -> Self {
        let name = name.into().trim().to_string();
        Self {
            id: slugify(&name),
            category: name,
            icon: icon.into(),
            is_icon_uploaded,
            dishes: Vec::new(),
        }
    }

    /// Builder-style dish list, used for seed data
    pub fn with_dishes(mut self, dishes: Vec<Dish>) -> Self {
        self.dishes = dishes;
        self
    }

    pub fn dish(&self, dish_id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == dish_id)
    }

    pub fn dish_position(&self, dish_id: &str) -> Option<usize> {
        self.dishes.iter().position(|d| d.id == dish_id)
    }
}

/// Update category payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub is_icon_uploaded: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_json_shape() {
        let category = Category::new("Main Course", "main_course", false)
            .with_dishes(vec![Dish::new("Biryani", 250.0, false)]);
        let json = serde_json::to_value(&category).unwrap();

        assert_eq!(json["id"], "main_course");
        assert_eq!(json["category"], "Main Course");
        assert_eq!(json["isIconUploaded"], false);
        assert_eq!(json["dishes"][0]["id"], "biryani");
    }

    #[test]
    fn test_category_defaults_on_missing_fields() {
        // Records from the first app version had no isIconUploaded
        let json = r#"{"id":"starters","category":"Starters","icon":"starters"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert!(!category.is_icon_uploaded);
        assert!(category.dishes.is_empty());
    }

    #[test]
    fn test_dish_lookup() {
        let category = Category::new("Desserts", "dessert", false).with_dishes(vec![
            Dish::new("Gulab Jamun", 60.0, true),
            Dish::new("Jalebi", 40.0, true),
        ]);
        assert_eq!(category.dish("jalebi").map(|d| d.price), Some(40.0));
        assert_eq!(category.dish_position("jalebi"), Some(1));
        assert!(category.dish("rasgulla").is_none());
    }
}
