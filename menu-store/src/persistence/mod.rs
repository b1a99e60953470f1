//! Durable storage for the catalog and cart

mod bridge;
mod storage;
mod worker;

pub use bridge::{LoadedState, PersistenceBridge, RecordSource};
pub use storage::{
    CART_DATA_KEY, MENU_DATA_KEY, RecordStore, RedbRecordStore, StorageError, StorageResult,
};
pub use worker::{PersistCommand, PersistWorker};
