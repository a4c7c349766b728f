
mod cli;
mod config;
mod error;
mod model;
mod web;

#[cfg(test)]
pub mod _dev_utils;

pub use self::error::{Error, Result};
pub use config::config;

use crate::cli::CommandLine;
use crate::model::record::RecordBmc;
use crate::model::store::{InMemoryStore, JsonFileStore};
use crate::model::ModelManager;
use clap::Parser;
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = CommandLine::parse();
    let port = args.port.unwrap_or(config().PORT);
    let data_file = args.data_file.unwrap_or_else(|| config().DATA_FILE.clone());
    let web_folder = args.web_folder.unwrap_or_else(|| config().WEB_FOLDER.clone());

    let mm = if args.in_memory {
        info!("{:<12} - in-memory record store", "STARTUP");
        ModelManager::new(InMemoryStore::new())
    } else {
        let mm = ModelManager::new(JsonFileStore::new(&data_file));
        match RecordBmc::list(&mm).await {
            Ok(records) => info!("{:<12} - {} records in {data_file}", "STARTUP", records.len()),
            Err(e) => warn!("{:<12} - record store {data_file} unreadable: {e}", "STARTUP"),
        }
        mm
    };

    let routes_all = web::routes_all(mm, &web_folder);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("{:<12} - {addr}", "LISTENING");
    info!("{:<12} - frontend at http://localhost:{port}", "LISTENING");
    info!("{:<12} - records API at http://localhost:{port}/api/records", "LISTENING");

    axum::serve(listener, routes_all).await?;
    Ok(())
}
