//! Dish query pipeline
//!
//! Pure functions deriving the visible dish list from a category's dishes:
//! text search, then the veg filter, then the price sort. The input is never
//! modified and equal inputs always give equal output.

use serde::{Deserialize, Serialize};
use shared::models::{Category, Dish};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Veg / non-veg filter toggle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VegFilter {
    #[default]
    All,
    Veg,
    #[serde(alias = "non_veg")]
    NonVeg,
}

impl VegFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Veg => "veg",
            Self::NonVeg => "non-veg",
        }
    }

    pub fn matches(&self, dish: &Dish) -> bool {
        match self {
            Self::All => true,
            Self::Veg => dish.is_veg,
            Self::NonVeg => !dish.is_veg,
        }
    }
}

/// Price sort toggle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Keep catalog order
    #[default]
    Default,
    #[serde(alias = "price_asc")]
    PriceAsc,
    #[serde(alias = "price_desc")]
    PriceDesc,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: {value}")]
pub struct ParseQueryError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for VegFilter {
    type Err = ParseQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "all" => Ok(Self::All),
            "veg" => Ok(Self::Veg),
            "non-veg" => Ok(Self::NonVeg),
            _ => Err(ParseQueryError {
                kind: "veg filter",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for SortMode {
    type Err = ParseQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "default" => Ok(Self::Default),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            _ => Err(ParseQueryError {
                kind: "sort mode",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for VegFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three browsing controls bundled together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishQuery {
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub veg_filter: VegFilter,
    #[serde(default)]
    pub sort_mode: SortMode,
}

impl DishQuery {
    pub fn new(search_text: impl Into<String>, veg_filter: VegFilter, sort_mode: SortMode) -> Self {
        Self {
            search_text: search_text.into(),
            veg_filter,
            sort_mode,
        }
    }

    pub fn apply(&self, dishes: &[Dish]) -> Vec<Dish> {
        query(dishes, &self.search_text, self.veg_filter, self.sort_mode)
    }
}

/// Filter and sort `dishes` without touching the input
pub fn query(
    dishes: &[Dish],
    search_text: &str,
    veg_filter: VegFilter,
    sort_mode: SortMode,
) -> Vec<Dish> {
    let needle = search_text.to_lowercase();

    let mut result: Vec<Dish> = dishes
        .iter()
        .filter(|d| needle.is_empty() || d.name.to_lowercase().contains(&needle))
        .filter(|d| veg_filter.matches(d))
        .cloned()
        .collect();

    // sort_by is stable: equal prices keep catalog order
    match sort_mode {
        SortMode::Default => {}
        SortMode::PriceAsc => result.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::PriceDesc => result.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    result
}

/// Run the pipeline on one category; an unknown index yields nothing
pub fn query_category(catalog: &[Category], index: usize, dish_query: &DishQuery) -> Vec<Dish> {
    catalog
        .get(index)
        .map(|c| dish_query.apply(&c.dishes))
        .unwrap_or_default()
}
