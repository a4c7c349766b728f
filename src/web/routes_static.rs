use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::routing::{any_service, MethodRouter};
use tower_http::services::ServeDir;

/// Serves the browser front-end; unknown paths get a bare 404.
pub fn serve_dir(web_folder: &str) -> MethodRouter {
    async fn handle_404() -> (StatusCode, &'static str) {
        (StatusCode::NOT_FOUND, "Resource not found.")
    }

    any_service(ServeDir::new(web_folder).not_found_service(handle_404.into_service()))
}
