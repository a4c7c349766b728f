
mod error;
mod file;
mod memory;

pub use self::error::{Error, Result};
pub use file::JsonFileStore;
pub use memory::InMemoryStore;

use async_trait::async_trait;

use crate::model::record::Record;

/// Persistence for the whole record collection.
///
/// Every call moves the full collection; there is no per-record access.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Returns every stored record in insertion order.
    /// A store that has never been written to yields an empty collection.
    async fn load(&self) -> Result<Vec<Record>>;

    /// Replaces the stored collection with `records`.
    async fn save(&self, records: &[Record]) -> Result<()>;
}
