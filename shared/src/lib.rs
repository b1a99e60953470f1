//! Shared types for the menu workspace
//!
//! Data models (dishes, categories, cart lines, profile), the unified error
//! code system, and small helpers used by the engine and the UI layer.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Catalog, CartLine, Category, CategoryUpdate, Dish, DishUpdate, UserProfile};
pub use serde::{Deserialize, Serialize};
