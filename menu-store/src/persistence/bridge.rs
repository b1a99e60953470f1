//! Persistence Bridge
//!
//! Hydrates the catalog and cart from the record store on startup and queues
//! a full snapshot write after every mutation. Loading never fails: a missing
//! or unreadable record falls back to the default catalog or an empty cart.

use super::storage::{CART_DATA_KEY, MENU_DATA_KEY, RecordStore, StorageError};
use super::worker::{PersistCommand, PersistWorker};
use crate::catalog::seed_catalog;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{CartLine, Catalog, Category};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Where a hydrated collection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    Stored,
    /// No record yet (first launch)
    Missing,
    /// Record present but not parseable
    Corrupted,
    /// Store read failed
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedState {
    pub catalog: Catalog,
    pub cart: Vec<CartLine>,
    pub catalog_source: RecordSource,
    pub cart_source: RecordSource,
}

#[derive(Clone)]
pub struct PersistenceBridge {
    store: Arc<dyn RecordStore>,
    tx: mpsc::UnboundedSender<PersistCommand>,
    default_catalog: Catalog,
}

impl PersistenceBridge {
    /// Start the write worker on the current tokio runtime
    pub fn spawn(store: Arc<dyn RecordStore>) -> (Self, JoinHandle<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = PersistWorker::new(store.clone());
        let handle = tokio::spawn(worker.run(rx));

        let bridge = Self {
            store,
            tx,
            default_catalog: seed_catalog(),
        };
        (bridge, handle)
    }

    /// Catalog used when no usable `MenuData` record exists
    pub fn with_default_catalog(mut self, catalog: Catalog) -> Self {
        self.default_catalog = catalog;
        self
    }

    pub fn load(&self) -> LoadedState {
        let (catalog, catalog_source) = self
            .read_record::<Catalog>(MENU_DATA_KEY)
            .unwrap_or_else(|source| (self.default_catalog.clone(), source));
        let (cart, cart_source) = self
            .read_record::<Vec<CartLine>>(CART_DATA_KEY)
            .unwrap_or_else(|source| (Vec::new(), source));

        tracing::info!(
            categories = catalog.len(),
            cart_lines = cart.len(),
            ?catalog_source,
            ?cart_source,
            "State loaded"
        );

        LoadedState {
            catalog,
            cart,
            catalog_source,
            cart_source,
        }
    }

    pub fn save(&self, catalog: &[Category], cart: &[CartLine]) {
        self.save_catalog(catalog);
        self.save_cart(cart);
    }

    pub fn save_catalog(&self, catalog: &[Category]) {
        self.enqueue(MENU_DATA_KEY, catalog);
    }

    pub fn save_cart(&self, cart: &[CartLine]) {
        self.enqueue(CART_DATA_KEY, cart);
    }

    /// Wait until every write queued so far has been applied
    pub async fn flush(&self) {
        let (reply, done) = oneshot::channel();
        if self.tx.send(PersistCommand::Flush(reply)).is_err() {
            return;
        }
        let _ = done.await;
    }

    fn read_record<T: DeserializeOwned>(&self, key: &str) -> Result<(T, RecordSource), RecordSource> {
        let bytes = match self.store.get(key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Err(RecordSource::Missing),
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to read record, using defaults");
                return Err(RecordSource::Unavailable);
            }
        };

        serde_json::from_slice(&bytes)
            .map(|value| (value, RecordSource::Stored))
            .map_err(|e| {
                let e = StorageError::from(e);
                tracing::warn!(key, code = %e.code(), error = %e, "Corrupted record, using defaults");
                RecordSource::Corrupted
            })
    }

    fn enqueue<T: Serialize + ?Sized>(&self, key: &'static str, value: &T) {
        let payload = match serde_json::to_vec(value) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to serialize record");
                return;
            }
        };

        if self.tx.send(PersistCommand::Write { key, payload }).is_err() {
            tracing::warn!(key, "Persistence worker stopped, write dropped");
        }
    }
}
