use anyhow::Context;
use parking_lot::RwLock;
use shared::models::{CartLine, Catalog, Category, CategoryUpdate, Dish, DishUpdate, UserProfile};
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::cart::{Bill, CartAggregator, CartError};
use crate::catalog::{CatalogError, CatalogStore, seed_catalog};
use crate::core::Config;
use crate::persistence::{LoadedState, PersistenceBridge, RedbRecordStore};
use crate::query::{DishQuery, query_category};

/// Menu state - the single store handed to every consumer
///
/// Cloning is cheap; clones share the same catalog, cart and write queue.
///
/// Every successful mutation updates memory first, then queues a snapshot of
/// the affected collection while still holding its write lock, so queued
/// writes follow mutation order. Rejected mutations change nothing and write
/// nothing.
///
/// # Example
///
/// ```ignore
/// let (state, worker) = MenuState::initialize(&Config::from_env()).await?;
/// let dish = state.add_dish("Starters", "Pani Puri", 60.0, true)?;
/// state.add_to_cart(&dish);
/// state.flush().await;
/// ```
#[derive(Clone)]
pub struct MenuState {
    catalog: Arc<RwLock<CatalogStore>>,
    cart: Arc<RwLock<CartAggregator>>,
    profile: Arc<UserProfile>,
    bridge: PersistenceBridge,
}

impl MenuState {
    /// Empty state; call [`MenuState::hydrate`] to load stored records
    pub fn new(bridge: PersistenceBridge, profile: UserProfile) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(CatalogStore::default())),
            cart: Arc::new(RwLock::new(CartAggregator::default())),
            profile: Arc::new(profile),
            bridge,
        }
    }

    /// Open storage under the work dir, start the write worker and hydrate
    ///
    /// The returned handle finishes once every clone of the state is dropped.
    pub async fn initialize(config: &Config) -> anyhow::Result<(Self, JoinHandle<()>)> {
        std::fs::create_dir_all(&config.work_dir)
            .with_context(|| format!("Failed to create work dir {}", config.work_dir))?;

        let db_path = config.db_path();
        let store = RedbRecordStore::open(&db_path)
            .with_context(|| format!("Failed to open database {}", db_path.display()))?;

        let default_catalog = if config.seed_on_empty {
            seed_catalog()
        } else {
            Catalog::new()
        };
        let (bridge, worker) = PersistenceBridge::spawn(Arc::new(store));
        let bridge = bridge.with_default_catalog(default_catalog);

        let state = Self::new(bridge, config.profile());
        state.hydrate();

        tracing::info!(path = %db_path.display(), "Menu state initialized");
        Ok((state, worker))
    }

    /// Replace in-memory state with whatever the store holds
    pub fn hydrate(&self) -> LoadedState {
        let loaded = self.bridge.load();
        self.catalog.write().replace_catalog(loaded.catalog.clone());
        self.cart.write().replace_lines(loaded.cart.clone());
        loaded
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Wait for queued writes to reach storage
    pub async fn flush(&self) {
        self.bridge.flush().await;
    }

    // =========================================================================
    // Catalog reads
    // =========================================================================

    pub fn catalog(&self) -> Catalog {
        self.catalog.read().catalog().to_vec()
    }

    pub fn category_count(&self) -> usize {
        self.catalog.read().len()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.catalog.read().selected_index()
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.catalog.read().selected_category().cloned()
    }

    /// Selection is view state and is not persisted
    pub fn select_category(&self, index: usize) -> Result<(), CatalogError> {
        self.catalog.write().select_category(index)
    }

    /// Visible dishes of the category at `index`
    pub fn dishes(&self, index: usize, dish_query: &DishQuery) -> Vec<Dish> {
        query_category(self.catalog.read().catalog(), index, dish_query)
    }

    /// Visible dishes of the selected category
    pub fn selected_dishes(&self, dish_query: &DishQuery) -> Vec<Dish> {
        let store = self.catalog.read();
        match store.selected_index() {
            Some(index) => query_category(store.catalog(), index, dish_query),
            None => Vec::new(),
        }
    }

    // =========================================================================
    // Catalog mutations
    // =========================================================================

    pub fn replace_catalog(&self, catalog: Catalog) {
        let mut store = self.catalog.write();
        store.replace_catalog(catalog);
        self.bridge.save_catalog(store.catalog());
    }

    pub fn add_category(
        &self,
        name: &str,
        icon: Option<&str>,
        is_icon_uploaded: bool,
    ) -> Result<Category, CatalogError> {
        let mut store = self.catalog.write();
        let category = store.add_category(name, icon, is_icon_uploaded)?;
        self.bridge.save_catalog(store.catalog());
        Ok(category)
    }

    pub fn edit_category(
        &self,
        index: usize,
        update: &CategoryUpdate,
    ) -> Result<Category, CatalogError> {
        let mut store = self.catalog.write();
        let category = store.edit_category(index, update)?;
        self.bridge.save_catalog(store.catalog());
        Ok(category)
    }

    pub fn delete_category(&self, index: usize) -> Option<Category> {
        let mut store = self.catalog.write();
        let removed = store.delete_category(index)?;
        self.bridge.save_catalog(store.catalog());
        Some(removed)
    }

    pub fn add_dish(
        &self,
        category_name: &str,
        name: &str,
        price: f64,
        is_veg: bool,
    ) -> Result<Dish, CatalogError> {
        let mut store = self.catalog.write();
        let dish = store.add_dish(category_name, name, price, is_veg)?;
        self.bridge.save_catalog(store.catalog());
        Ok(dish)
    }

    pub fn edit_dish(
        &self,
        category_name: &str,
        original_dish_id: &str,
        update: &DishUpdate,
    ) -> Result<Dish, CatalogError> {
        let mut store = self.catalog.write();
        let dish = store.edit_dish(category_name, original_dish_id, update)?;
        self.bridge.save_catalog(store.catalog());
        Ok(dish)
    }

    pub fn delete_dish(&self, category_index: usize, dish_id: &str) -> Option<Dish> {
        let mut store = self.catalog.write();
        let removed = store.delete_dish(category_index, dish_id)?;
        self.bridge.save_catalog(store.catalog());
        Some(removed)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    pub fn cart(&self) -> Vec<CartLine> {
        self.cart.read().lines().to_vec()
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.read().total()
    }

    pub fn cart_item_count(&self) -> u32 {
        self.cart.read().item_count()
    }

    pub fn add_to_cart(&self, dish: &Dish) -> u32 {
        let mut cart = self.cart.write();
        let quantity = cart.add_to_cart(dish);
        self.bridge.save_cart(cart.lines());
        quantity
    }

    pub fn increase_quantity(&self, line_id: &str) -> Result<u32, CartError> {
        let mut cart = self.cart.write();
        let quantity = cart.increase_quantity(line_id)?;
        self.bridge.save_cart(cart.lines());
        Ok(quantity)
    }

    pub fn decrease_quantity(&self, line_id: &str) -> Result<Option<u32>, CartError> {
        let mut cart = self.cart.write();
        let quantity = cart.decrease_quantity(line_id)?;
        self.bridge.save_cart(cart.lines());
        Ok(quantity)
    }

    pub fn remove_line(&self, line_id: &str) -> Option<CartLine> {
        let mut cart = self.cart.write();
        let removed = cart.remove_line(line_id)?;
        self.bridge.save_cart(cart.lines());
        Some(removed)
    }

    pub fn clear_cart(&self) -> usize {
        let mut cart = self.cart.write();
        let cleared = cart.clear();
        if cleared > 0 {
            self.bridge.save_cart(cart.lines());
        }
        cleared
    }

    /// Bill for the current cart under the profile's restaurant name
    pub fn bill(&self, issued_at: i64) -> Result<Bill, CartError> {
        Bill::from_cart(&self.cart.read(), &self.profile.restaurant_name, issued_at)
    }
}
