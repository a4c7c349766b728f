
mod error;
pub mod record;
pub mod store;

use std::sync::Arc;

use store::RecordStore;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub use self::error::{Error, Result};

#[derive(Clone)]
pub struct ModelManager {
    store: Arc<dyn RecordStore>,
    collection_lock: Arc<RwLock<()>>,
}

impl ModelManager {
    pub fn new(store: impl RecordStore) -> Self {
        ModelManager {
            store: Arc::new(store),
            collection_lock: Arc::new(RwLock::new(())),
        }
    }

    pub(in crate::model) fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    /// Shared guard for a plain read of the collection.
    pub(in crate::model) async fn lock_reads(&self) -> RwLockReadGuard<'_, ()> {
        self.collection_lock.read().await
    }

    /// Exclusive guard held across a whole load-modify-save, so no reader
    /// or other writer observes the collection mid-write.
    pub(in crate::model) async fn lock_writes(&self) -> RwLockWriteGuard<'_, ()> {
        self.collection_lock.write().await
    }
}
