//! Glass Todo Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - api: HTTP handlers

pub mod config;
mod domain;
mod repository;
mod api;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use api::{build_router, AppState};
use config::Config;
use repository::{init_db, TaskRepository};

pub use domain::{DomainError, Task, TaskPatch};

const DEFAULT_LOG_FILTER: &str = "glass_todo=info,glass_todo_lib=info,tower_http=info";

/// Install the fmt subscriber; `RUST_LOG` overrides the default filter
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Open the database, bind the listener and serve until Ctrl-C
pub async fn run(config: Config) -> anyhow::Result<()> {
    let db_state = init_db(&config.db_path)
        .await
        .with_context(|| format!("Failed to open database {}", config.db_path.display()))?;
    tracing::info!(path = %config.db_path.display(), "database initialized");

    let state = AppState::new(TaskRepository::new(db_state.connection()));
    let app = build_router(state, config.static_dir.as_deref());
    if let Some(dir) = &config.static_dir {
        tracing::info!(dir = %dir.display(), "serving frontend");
    }

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;
    tracing::info!("listening on http://{}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
