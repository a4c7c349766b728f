
use std::sync::Arc;

use crate::web::{self, ClientError};
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use serde_with::skip_serializing_none;
use tracing::{debug, info};
use uuid::Uuid;

pub async fn mw_response_map(
    uri: Uri,
    req_method: Method,
    res: Response,
) -> Response {
    debug!("{:<12} - mw_response_map", "RES_MAPPER");

    let uuid = Uuid::new_v4();
    let web_error = res.extensions().get::<Arc<web::Error>>().cloned();
    let client_status_error = web_error.as_deref().map(|se| se.client_status_and_error());

    let error_response =
        client_status_error
        .as_ref()
        .map(|(status_code, client_error)| {
            let client_error_body = json!({
                "message": client_error.message(),
                "error": {
                    "type": client_error.as_ref(),
                    "req_uuid": uuid.to_string(),
                }
            });
            debug!("CLIENT ERROR BODY:\n{client_error_body}");
            (*status_code, Json(client_error_body)).into_response()
        });

    let client_error = client_status_error.unzip().1;
    log_request(uuid, req_method, uri, web_error.as_deref(), client_error);

    error_response.unwrap_or(res)
}

#[skip_serializing_none]
#[derive(Serialize)]
struct RequestLogLine {
    uuid: String,
    timestamp: String,

    http_method: String,
    http_path: String,

    client_error_type: Option<String>,
    error_type: Option<String>,
    error_data: Option<Value>,
}

fn log_request(
    uuid: Uuid,
    req_method: Method,
    uri: Uri,
    web_error: Option<&web::Error>,
    client_error: Option<ClientError>,
) {
    let error_type = web_error.map(|se| se.as_ref().to_string());
    let error_data = web_error
        .and_then(|se| serde_json::to_value(se).ok())
        .and_then(|mut v| v.get_mut("data").map(|v| v.take()));

    let log_line = RequestLogLine {
        uuid: uuid.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        http_method: req_method.to_string(),
        http_path: uri.path().to_string(),
        client_error_type: client_error.map(|e| e.as_ref().to_string()),
        error_type,
        error_data,
    };

    match serde_json::to_string(&log_line) {
        Ok(line) => info!("{:<12} - {line}", "REQUEST"),
        Err(e) => debug!("{:<12} - unable to serialize request log: {e}", "REQUEST"),
    }
}
