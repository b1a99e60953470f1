//! Default menu used when no stored catalog exists

use shared::models::{Catalog, Category, Dish};

/// The catalog a fresh install starts with
pub fn seed_catalog() -> Catalog {
    vec![
        Category::new("Starters", "starters", false).with_dishes(vec![
            Dish::new("Masala Papad", 30.0, true),
            Dish::new("Samosa", 40.0, true),
            Dish::new("Paneer Tikka", 120.0, true),
            Dish::new("Aloo Tikki", 50.0, true),
        ]),
        Category::new("Main Course", "main_course", false).with_dishes(vec![
            Dish::new("Butter Paneer", 300.0, true),
            Dish::new("Dal Makhani", 180.0, true),
            Dish::new("Palak Paneer", 220.0, true),
            Dish::new("Chicken Curry", 350.0, false),
            Dish::new("Biryani", 250.0, false),
        ]),
        Category::new("Desserts", "dessert", false).with_dishes(vec![
            Dish::new("Gulab Jamun", 60.0, true),
            Dish::new("Rasgulla", 50.0, true),
            Dish::new("Jalebi", 40.0, true),
            Dish::new("Ice-Cream", 30.0, true),
        ]),
        Category::new("Beverages", "beverages", false).with_dishes(vec![
            Dish::new("Water Bottle", 20.0, true),
            Dish::new("Masala Chai", 30.0, true),
            Dish::new("Lassi", 80.0, true),
            Dish::new("Cold Drink", 40.0, true),
            Dish::new("Jaljeera", 35.0, true),
        ]),
    ]
}
