//! Background write worker
//!
//! Consumes [`PersistCommand`]s from an mpsc channel and applies them to the
//! record store one at a time, so writes land in enqueue order. Each write is
//! a blocking redb transaction and runs on the blocking pool. Exits when every
//! sender is dropped.

use super::storage::RecordStore;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

#[derive(Debug)]
pub enum PersistCommand {
    /// Overwrite one record with a serialized snapshot
    Write {
        key: &'static str,
        payload: Vec<u8>,
    },
    /// Reply once everything queued before it has been applied
    Flush(oneshot::Sender<()>),
}

pub struct PersistWorker {
    store: Arc<dyn RecordStore>,
}

impl PersistWorker {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Run the worker (blocks until the channel closes)
    pub async fn run(self, mut rx: mpsc::UnboundedReceiver<PersistCommand>) {
        tracing::debug!("Persistence worker started");

        while let Some(cmd) = rx.recv().await {
            match cmd {
                PersistCommand::Write { key, payload } => self.write(key, payload).await,
                PersistCommand::Flush(reply) => {
                    let _ = reply.send(());
                }
            }
        }

        tracing::debug!("Persistence channel closed, worker stopping");
    }

    async fn write(&self, key: &'static str, payload: Vec<u8>) {
        let store = self.store.clone();
        let bytes = payload.len();
        let result = tokio::task::spawn_blocking(move || store.put(key, &payload)).await;

        // Memory stays authoritative; the next save resends the full snapshot
        match result {
            Ok(Ok(())) => tracing::trace!(key, bytes, "Record written"),
            Ok(Err(e)) => tracing::error!(key, error = %e, "Failed to write record"),
            Err(e) => tracing::error!(key, error = %e, "Record write task failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::storage::{StorageError, StorageResult};
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::mpsc as std_mpsc;
    use std::time::Duration;

    /// Store whose writes wait for a go-ahead from the test
    struct GatedStore {
        gate: Mutex<std_mpsc::Receiver<()>>,
        records: Mutex<HashMap<String, Vec<u8>>>,
    }

    impl RecordStore for GatedStore {
        fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
            Ok(self.records.lock().get(key).cloned())
        }

        fn put(&self, key: &str, value: &[u8]) -> StorageResult<()> {
            self.gate
                .lock()
                .recv_timeout(Duration::from_secs(5))
                .map_err(|e| StorageError::Unavailable(e.to_string()))?;
            self.records.lock().insert(key.to_string(), value.to_vec());
            Ok(())
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_write_does_not_block_the_runtime() {
        let (open, gate) = std_mpsc::channel();
        let store = Arc::new(GatedStore {
            gate: Mutex::new(gate),
            records: Mutex::new(HashMap::new()),
        });

        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(PersistWorker::new(store.clone()).run(rx));

        tx.send(PersistCommand::Write {
            key: "CartData",
            payload: b"[]".to_vec(),
        })
        .unwrap();

        // The single runtime thread must stay free while the write waits
        tokio::time::sleep(Duration::from_millis(20)).await;
        open.send(()).unwrap();

        let (reply, done) = oneshot::channel();
        tx.send(PersistCommand::Flush(reply)).unwrap();
        done.await.unwrap();
        assert_eq!(store.get("CartData").unwrap().as_deref(), Some(&b"[]"[..]));

        drop(tx);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_writes_apply_in_enqueue_order() {
        let (open, gate) = std_mpsc::channel();
        let store = Arc::new(GatedStore {
            gate: Mutex::new(gate),
            records: Mutex::new(HashMap::new()),
        });
        for _ in 0..10 {
            open.send(()).unwrap();
        }

        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(PersistWorker::new(store.clone()).run(rx));
        for i in 0..10u8 {
            tx.send(PersistCommand::Write {
                key: "MenuData",
                payload: vec![i],
            })
            .unwrap();
        }

        let (reply, done) = oneshot::channel();
        tx.send(PersistCommand::Flush(reply)).unwrap();
        done.await.unwrap();
        assert_eq!(store.get("MenuData").unwrap(), Some(vec![9]));
    }
}
