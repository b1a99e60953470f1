//! Menu Store - restaurant menu and cart core
//!
//! # Overview
//!
//! - **Catalog** (`catalog`): categories and their dishes, validated mutations
//! - **Cart** (`cart`): cart lines, running total and bill rendering
//! - **Query** (`query`): search, veg filter and price sort over a dish list
//! - **Persistence** (`persistence`): redb records written by a background worker
//! - **State** (`core`): [`MenuState`] ties the above together behind one handle
//!
//! # Layout
//!
//! ```text
//! menu-store/src/
//! ├── core/          # Config, MenuState
//! ├── catalog/       # CatalogStore, seed menu
//! ├── cart/          # CartAggregator, Bill
//! ├── query/         # Dish query pipeline
//! ├── persistence/   # RecordStore, write worker, bridge
//! └── utils/         # Logging, money, validation
//! ```

pub mod cart;
pub mod catalog;
pub mod core;
pub mod persistence;
pub mod query;
pub mod utils;

pub use cart::{Bill, CartAggregator, CartError};
pub use catalog::{CatalogError, CatalogStore};
pub use core::{Config, MenuState};
pub use persistence::{PersistenceBridge, RecordStore, RedbRecordStore};
pub use query::{DishQuery, SortMode, VegFilter};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read configuration and start logging
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    Ok(config)
}
