//! Recipe API server entry point.
//!
//! # Responsibility
//! - Read configuration from the environment once.
//! - Initialize logging and storage, then serve the router.
//!
//! # Invariants
//! - Schema migrations run to completion before the listener binds.

use recipe_api::{create_router, AppState};
use recipe_core::db::open_db;
use recipe_core::{default_log_level, init_logging};
use std::error::Error;

const DEFAULT_DB_PATH: &str = "recipes.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let log_level =
        std::env::var("RECIPE_API_LOG_LEVEL").unwrap_or_else(|_| default_log_level().to_string());
    let log_dir = std::env::var("RECIPE_API_LOG_DIR").ok();
    init_logging(&log_level, log_dir.as_deref())?;

    let db_path = std::env::var("RECIPE_API_DB").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
    let bind_addr =
        std::env::var("RECIPE_API_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let conn = open_db(&db_path)?;
    let app = create_router(AppState::new(conn));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    log::info!(
        "event=server_start module=main status=ok addr={bind_addr} db={db_path} version={}",
        env!("CARGO_PKG_VERSION")
    );

    axum::serve(listener, app).await?;
    Ok(())
}
