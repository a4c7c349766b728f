use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, error};
use uuid::Uuid;

use super::{RecordStore, Result};
use crate::model::record::Record;

/// Keeps the collection as a pretty-printed JSON array in a single file.
/// The file is rewritten in full on every save.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Record>> {
        debug!("{:<12} - load {:?}", "STORE", self.path);

        let exists = tokio::fs::try_exists(&self.path).await.inspect_err(|e| {
            error!("{:<12} - unable to stat {:?}: {e}", "STORE", self.path)
        })?;
        if !exists {
            replace_file(&self.path, "[]").await.inspect_err(|e| {
                error!("{:<12} - unable to create {:?}: {e}", "STORE", self.path)
            })?;
            return Ok(vec![]);
        }

        let data = tokio::fs::read_to_string(&self.path).await.inspect_err(|e| {
            error!("{:<12} - unable to read {:?}: {e}", "STORE", self.path)
        })?;

        let records = serde_json::from_str(&data).inspect_err(|e| {
            error!("{:<12} - unable to parse {:?}: {e}", "STORE", self.path)
        })?;
        Ok(records)
    }

    async fn save(&self, records: &[Record]) -> Result<()> {
        debug!("{:<12} - save {} records to {:?}", "STORE", records.len(), self.path);

        let data = serde_json::to_string_pretty(records)?;
        replace_file(&self.path, &data).await.inspect_err(|e| {
            error!("{:<12} - unable to write {:?}: {e}", "STORE", self.path)
        })?;
        Ok(())
    }
}

/// Writes `contents` to a sibling temp file and renames it over `path`,
/// so readers see either the old or the new file, never a partial one.
async fn replace_file(path: &Path, contents: &str) -> std::io::Result<()> {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("records");
    let tmp_path = path.with_file_name(format!(".{file_name}.{}.tmp", Uuid::new_v4()));

    tokio::fs::write(&tmp_path, contents).await?;
    if let Err(e) = tokio::fs::rename(&tmp_path, path).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(e);
    }
    Ok(())
}
