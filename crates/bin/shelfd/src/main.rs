//! # shelfd — shelf daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`shelf.toml` + environment overrides)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting the services as resource controllers
//! - Bind to a TCP port and serve until ctrl-c
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use shelf_adapter_storage_sqlite_sqlx::{SqliteDemoRepository, SqliteUserRepository};
use shelf_app::services::demo_service::DemoService;
use shelf_app::services::user_service::UserService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let pool = shelf_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;

    // Repositories
    let user_repo = SqliteUserRepository::new(pool.clone());
    let demo_repo = SqliteDemoRepository::new(pool);

    // Services
    let user_service = UserService::new(user_repo);
    let demo_service = DemoService::new(demo_repo);

    // HTTP
    let app =
        shelf_adapter_http_axum::router::build(Arc::new(user_service), Arc::new(demo_service));

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "shelfd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install ctrl-c handler");
    }
}
