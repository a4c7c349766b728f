
mod error;
pub mod mw_res_map;
pub mod rest;
pub mod routes_static;

pub use self::error::{ClientError, Error, Result};

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;

use crate::model::ModelManager;
use mw_res_map::mw_response_map;

/// Full application router: the records API, the response mapper, CORS,
/// and static files from `web_folder` for everything else.
pub fn routes_all(mm: ModelManager, web_folder: &str) -> Router {
    Router::new()
        .merge(rest::routes(mm))
        .fallback_service(routes_static::serve_dir(web_folder))
        .layer(middleware::map_response(mw_response_map))
        .layer(CorsLayer::permissive())
}
