//! Catalog Store - categories and their dishes
//!
//! Owns the canonical catalog plus the currently selected category. Every
//! mutation validates against the current snapshot first, so a rejected call
//! leaves the catalog untouched.

use super::error::CatalogError;
use crate::utils::validation::{validate_icon, validate_name, validate_price};
use shared::models::{Catalog, Category, CategoryUpdate, Dish, DishUpdate};
use shared::util::slugify;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStore {
    categories: Catalog,
    /// Selected category index, `None` only when the catalog is empty
    selected: Option<usize>,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        let mut store = Self::default();
        store.replace_catalog(catalog);
        store
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn catalog(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Find a category by display name (case-insensitive, via its slug)
    pub fn find_category(&self, name: &str) -> Option<(usize, &Category)> {
        let id = slugify(name);
        self.categories
            .iter()
            .enumerate()
            .find(|(_, c)| c.id == id)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.selected.and_then(|i| self.categories.get(i))
    }

    pub fn select_category(&mut self, index: usize) -> Result<(), CatalogError> {
        if index >= self.categories.len() {
            return Err(CatalogError::CategoryIndexOutOfRange(index));
        }
        self.selected = Some(index);
        Ok(())
    }

    // =========================================================================
    // Whole-collection replace
    // =========================================================================

    /// Replace the whole catalog. The selection is kept when still in range,
    /// otherwise it falls back to the first category.
    ///
    /// Repeated ids are repaired: a category whose id was already seen is
    /// merged into the first one, and a repeated dish id within a category
    /// keeps only its first dish.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.categories = repair_catalog(catalog);
        self.selected = match self.selected {
            _ if self.categories.is_empty() => None,
            Some(i) if i < self.categories.len() => Some(i),
            _ => Some(0),
        };
    }

    // =========================================================================
    // Categories
    // =========================================================================

    pub fn add_category(
        &mut self,
        name: &str,
        icon: Option<&str>,
        is_icon_uploaded: bool,
    ) -> Result<Category, CatalogError> {
        let name = validate_name(name)?;
        let icon = validate_icon(icon)?;

        let category = Category::new(name, icon, is_icon_uploaded);
        if self.categories.iter().any(|c| c.id == category.id) {
            return Err(CatalogError::DuplicateCategory(category.id));
        }

        self.categories.push(category.clone());
        if self.selected.is_none() {
            self.selected = Some(0);
        }
        tracing::debug!(category_id = %category.id, "Category added");
        Ok(category)
    }

    /// Rename a category and/or swap its icon. The id follows the name.
    pub fn edit_category(
        &mut self,
        index: usize,
        update: &CategoryUpdate,
    ) -> Result<Category, CatalogError> {
        let current = self
            .categories
            .get(index)
            .ok_or(CatalogError::CategoryIndexOutOfRange(index))?;

        let name = match &update.name {
            Some(name) => validate_name(name)?,
            None => current.category.clone(),
        };
        let icon = match &update.icon {
            Some(icon) => validate_icon(Some(icon))?,
            None => current.icon.clone(),
        };

        let id = slugify(&name);
        let collides = self
            .categories
            .iter()
            .enumerate()
            .any(|(i, c)| i != index && c.id == id);
        if collides {
            return Err(CatalogError::DuplicateCategory(id));
        }

        let category = &mut self.categories[index];
        category.id = id;
        category.category = name;
        category.icon = icon;
        if let Some(uploaded) = update.is_icon_uploaded {
            category.is_icon_uploaded = uploaded;
        }
        Ok(category.clone())
    }

    /// Remove the category at `index`; out-of-range is a no-op.
    pub fn delete_category(&mut self, index: usize) -> Option<Category> {
        if index >= self.categories.len() {
            return None;
        }
        let removed = self.categories.remove(index);

        self.selected = match self.selected {
            _ if self.categories.is_empty() => None,
            Some(s) if s == index => Some(0),
            Some(s) if s > index => Some(s - 1),
            other => other,
        };

        tracing::debug!(category_id = %removed.id, "Category deleted");
        Some(removed)
    }

    // =========================================================================
    // Dishes
    // =========================================================================

    /// Append a dish to the category whose name matches `category_name`.
    pub fn add_dish(
        &mut self,
        category_name: &str,
        name: &str,
        price: f64,
        is_veg: bool,
    ) -> Result<Dish, CatalogError> {
        let name = validate_name(name)?;
        let price = validate_price(price)?;
        let index = self.category_index(category_name)?;

        let dish = Dish::new(name, price, is_veg);
        let category = &mut self.categories[index];
        if category.dish(&dish.id).is_some() {
            return Err(CatalogError::DuplicateDish {
                category: category.id.clone(),
                dish_id: dish.id,
            });
        }

        category.dishes.push(dish.clone());
        tracing::debug!(category_id = %category.id, dish_id = %dish.id, "Dish added");
        Ok(dish)
    }

    /// Replace a dish in place. The id is recomputed from the (new) name.
    pub fn edit_dish(
        &mut self,
        category_name: &str,
        original_dish_id: &str,
        update: &DishUpdate,
    ) -> Result<Dish, CatalogError> {
        let index = self.category_index(category_name)?;
        let category = &self.categories[index];
        let position =
            category
                .dish_position(original_dish_id)
                .ok_or_else(|| CatalogError::DishNotFound {
                    category: category.id.clone(),
                    dish_id: original_dish_id.to_string(),
                })?;

        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(price) = update.price {
            validate_price(price)?;
        }

        let dish = update.apply_to(&category.dishes[position]);
        let collides = category
            .dishes
            .iter()
            .enumerate()
            .any(|(i, d)| i != position && d.id == dish.id);
        if collides {
            return Err(CatalogError::DuplicateDish {
                category: category.id.clone(),
                dish_id: dish.id,
            });
        }

        self.categories[index].dishes[position] = dish.clone();
        tracing::debug!(
            dish_id = %original_dish_id,
            new_id = %dish.id,
            "Dish updated"
        );
        Ok(dish)
    }

    /// Remove a dish. Unknown category index or dish id is a no-op.
    pub fn delete_dish(&mut self, category_index: usize, dish_id: &str) -> Option<Dish> {
        let category = self.categories.get_mut(category_index)?;
        let position = category.dish_position(dish_id)?;
        let removed = category.dishes.remove(position);
        tracing::debug!(category_id = %category.id, dish_id = %dish_id, "Dish deleted");
        Some(removed)
    }

    fn category_index(&self, category_name: &str) -> Result<usize, CatalogError> {
        self.find_category(category_name)
            .map(|(i, _)| i)
            .ok_or_else(|| CatalogError::CategoryNotFound(category_name.to_string()))
    }
}

fn repair_catalog(catalog: Catalog) -> Catalog {
    let mut repaired: Catalog = Vec::with_capacity(catalog.len());
    for mut category in catalog {
        let dishes = std::mem::take(&mut category.dishes);
        let target = match repaired.iter().position(|c| c.id == category.id) {
            Some(i) => {
                tracing::warn!(category_id = %category.id, "Merging duplicate category");
                i
            }
            None => {
                repaired.push(category);
                repaired.len() - 1
            }
        };

        let target = &mut repaired[target];
        for dish in dishes {
            if target.dish(&dish.id).is_some() {
                tracing::warn!(
                    category_id = %target.id,
                    dish_id = %dish.id,
                    "Dropping duplicate dish"
                );
                continue;
            }
            target.dishes.push(dish);
        }
    }
    repaired
}
