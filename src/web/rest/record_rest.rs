
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use crate::model::{record::{Record, RecordBmc, RecordForCreate}, ModelManager};
use crate::web::{Error, Result};

pub async fn list_records(State(mm): State<ModelManager>) -> Result<Json<Vec<Record>>> {
    debug!("{:<12} - list_records", "HANDLER");

    let records = RecordBmc::list(&mm).await?;
    Ok(Json(records))
}

pub async fn create_record(
    State(mm): State<ModelManager>,
    payload: core::result::Result<Json<RecordForCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>)> {
    debug!("{:<12} - create_record", "HANDLER");

    let Json(record_c) = payload.map_err(|e| Error::InvalidBody(e.body_text()))?;
    let record = RecordBmc::create(&mm, record_c).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn delete_record(
    State(mm): State<ModelManager>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    debug!("{:<12} - delete_record {id}", "HANDLER");

    RecordBmc::delete(&mm, &id).await?;
    Ok(Json(json!({ "message": "Record deleted successfully." })))
}
