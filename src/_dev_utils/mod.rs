
use crate::model::record::Record;
use crate::model::store::InMemoryStore;
use crate::model::ModelManager;

/// Fresh model manager over an empty in-memory store.
pub fn init_test() -> ModelManager {
    ModelManager::new(InMemoryStore::new())
}

pub fn init_test_with(records: Vec<Record>) -> ModelManager {
    ModelManager::new(InMemoryStore::with_records(records))
}

pub fn seed_records() -> Vec<Record> {
    [("seed-a", "Song A"), ("seed-b", "Song B")]
        .into_iter()
        .map(|(id, title)| Record {
            id: id.to_string(),
            title: title.to_string(),
            url: format!("http://x/{id}"),
        })
        .collect()
}
