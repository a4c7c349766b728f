use axum::{routing::{delete, get}, Router};
use record_rest::{create_record, delete_record, list_records};

use crate::model::ModelManager;

mod record_rest;

pub fn routes(mm: ModelManager) -> Router {
    Router::new()
        .route("/api/records", get(list_records).post(create_record))
        .route("/api/records/{id}", delete(delete_record))
        .with_state(mm)
}
