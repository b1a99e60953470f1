//! Menu catalog - categories and dishes
//!
//! - [`CatalogStore`]: owns the categories, dishes and the selected category
//! - [`CatalogError`]: validation failures for catalog mutations
//! - [`seed_catalog`]: menu used on first start

mod error;
mod seed;
mod store;

pub use error::CatalogError;
pub use seed::seed_catalog;
pub use store::CatalogStore;
