use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{RecordStore, Result};
use crate::model::record::Record;

#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<Vec<Record>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn load(&self) -> Result<Vec<Record>> {
        Ok(self.records.read().await.clone())
    }

    async fn save(&self, records: &[Record]) -> Result<()> {
        *self.records.write().await = records.to_vec();
        Ok(())
    }
}
