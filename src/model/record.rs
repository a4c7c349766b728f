
use crate::model::{Error, ModelManager, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecordForCreate {
    pub title: Option<String>,
    pub url: Option<String>,
}

pub struct RecordBmc;

impl RecordBmc {
    pub async fn list(mm: &ModelManager) -> Result<Vec<Record>> {
        let _guard = mm.lock_reads().await;
        let records = mm.store().load().await?;
        Ok(records)
    }

    pub async fn create(mm: &ModelManager, record_c: RecordForCreate) -> Result<Record> {
        let title = required(record_c.title, "title")?;
        let url = required(record_c.url, "url")?;

        let _guard = mm.lock_writes().await;
        let mut records = mm.store().load().await?;

        let record = Record {
            id: Uuid::new_v4().to_string(),
            title,
            url,
        };
        records.push(record.clone());
        mm.store().save(&records).await?;

        debug!("{:<12} - created record {}", "MODEL", record.id);
        Ok(record)
    }

    pub async fn delete(mm: &ModelManager, id: &str) -> Result<()> {
        let _guard = mm.lock_writes().await;
        let mut records = mm.store().load().await?;

        let initial_len = records.len();
        records.retain(|record| record.id != id);

        if records.len() == initial_len {
            return Err(Error::EntityNotFound { entity: "record", id: id.to_string() });
        }

        mm.store().save(&records).await?;
        debug!("{:<12} - deleted record {id}", "MODEL");
        Ok(())
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(Error::MissingField { field })
}

#[cfg(test)]
mod tests {
    use crate::_dev_utils;
    use crate::model::store::JsonFileStore;
    use super::*;

    fn record_c(title: &str, url: &str) -> RecordForCreate {
        RecordForCreate {
            title: Some(title.to_string()),
            url: Some(url.to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_ok() -> Result<()> {
        let mm = _dev_utils::init_test();
        let fx_title = "test_create_ok title";
        let fx_url = "http://x/test_create_ok";

        let record = RecordBmc::create(&mm, record_c(fx_title, fx_url)).await?;

        let records = RecordBmc::list(&mm).await?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], record);
        assert_eq!(record.title, fx_title);
        assert_eq!(record.url, fx_url);
        assert!(Uuid::parse_str(&record.id).is_ok());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_ids_unique() -> Result<()> {
        let mm = _dev_utils::init_test();

        for i in 0..10 {
            RecordBmc::create(&mm, record_c(&format!("song {i}"), "http://x/same")).await?;
        }

        let mut ids: Vec<String> = RecordBmc::list(&mm).await?.into_iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_missing_fields() -> Result<()> {
        let mm = _dev_utils::init_test();
        RecordBmc::create(&mm, record_c("kept", "http://x/kept")).await?;
        let before = RecordBmc::list(&mm).await?;

        let cases = [
            (RecordForCreate { title: None, url: Some("http://x/a".to_string()) }, "title"),
            (RecordForCreate { title: Some("A".to_string()), url: None }, "url"),
            (record_c("", "http://x/a"), "title"),
            (record_c("A", ""), "url"),
            (RecordForCreate::default(), "title"),
        ];

        for (payload, fx_field) in cases {
            let res = RecordBmc::create(&mm, payload).await;
            assert!(
                matches!(res, Err(Error::MissingField { field }) if field == fx_field),
                "expected missing {fx_field}, got {res:?}"
            );
        }

        assert_eq!(RecordBmc::list(&mm).await?, before);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_not_found() -> Result<()> {
        let mm = _dev_utils::init_test();
        RecordBmc::create(&mm, record_c("A", "http://x/a")).await?;
        let before = RecordBmc::list(&mm).await?;

        let res = RecordBmc::delete(&mm, "no-such-id").await;

        assert!(
            matches!(&res, Err(Error::EntityNotFound { entity: "record", id }) if id == "no-such-id"),
            "got {res:?}"
        );
        assert_eq!(RecordBmc::list(&mm).await?, before);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_removes_only_target() -> Result<()> {
        let mm = _dev_utils::init_test();
        let a = RecordBmc::create(&mm, record_c("A", "http://x/a")).await?;
        let b = RecordBmc::create(&mm, record_c("B", "http://x/b")).await?;
        let c = RecordBmc::create(&mm, record_c("C", "http://x/c")).await?;

        RecordBmc::delete(&mm, &b.id).await?;

        assert_eq!(RecordBmc::list(&mm).await?, vec![a, c]);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_idempotent() -> Result<()> {
        let mm = _dev_utils::init_test();
        RecordBmc::create(&mm, record_c("A", "http://x/a")).await?;
        RecordBmc::create(&mm, record_c("B", "http://x/b")).await?;

        let first = RecordBmc::list(&mm).await?;
        let second = RecordBmc::list(&mm).await?;

        assert_eq!(first, second);
        Ok(())
    }

    #[tokio::test]
    async fn test_songs_scenario() -> Result<()> {
        let mm = _dev_utils::init_test();
        assert!(RecordBmc::list(&mm).await?.is_empty());

        let a = RecordBmc::create(&mm, record_c("Song A", "http://x/a")).await?;
        let records = RecordBmc::list(&mm).await?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Song A");
        assert_eq!(records[0].url, "http://x/a");

        RecordBmc::create(&mm, record_c("Song B", "http://x/b")).await?;
        let titles: Vec<String> = RecordBmc::list(&mm).await?.into_iter().map(|r| r.title).collect();
        assert_eq!(titles, ["Song A", "Song B"]);

        RecordBmc::delete(&mm, &a.id).await?;
        let records = RecordBmc::list(&mm).await?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Song B");

        let res = RecordBmc::delete(&mm, &a.id).await;
        assert!(matches!(res, Err(Error::EntityNotFound { .. })));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_all_kept() -> Result<()> {
        let mm = _dev_utils::init_test();

        let tasks: Vec<_> = (0..32)
            .map(|i| {
                let mm = mm.clone();
                tokio::spawn(async move {
                    RecordBmc::create(&mm, record_c(&format!("song {i}"), "http://x/s")).await
                })
            })
            .collect();

        for task in tasks {
            task.await.expect("create task panicked")?;
        }

        assert_eq!(RecordBmc::list(&mm).await?.len(), 32);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_file_store_lists_during_creates() -> Result<()> {
        let dir = tempfile::tempdir().expect("tempdir");
        let mm = ModelManager::new(JsonFileStore::new(dir.path().join("records.json")));
        let fx_count = 100;
        let fx_title = "t".repeat(4096);

        let writer = {
            let mm = mm.clone();
            tokio::spawn(async move {
                for i in 0..fx_count {
                    RecordBmc::create(&mm, record_c(&format!("{fx_title} {i}"), "http://x/s")).await?;
                }
                Ok::<_, Error>(())
            })
        };

        let mut last_len = 0;
        while !writer.is_finished() {
            let records = RecordBmc::list(&mm).await?;
            assert!(records.len() >= last_len, "list went backwards");
            last_len = records.len();
        }
        writer.await.expect("writer task panicked")?;

        assert_eq!(RecordBmc::list(&mm).await?.len(), fx_count);
        Ok(())
    }
}
