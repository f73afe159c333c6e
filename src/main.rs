//! Smart Calendar Server
//!
//! REST API server for the Smart Calendar scheduling core.

use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smartcal::{
    api,
    config::{AppConfig, StorageBackend},
    models::category::CategoryCatalog,
    repository::{InMemoryEventRepository, SharedEventRepository, SqliteEventRepository},
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("smartcal={},tower_http=debug", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Smart Calendar Server v{}", env!("CARGO_PKG_VERSION"));

    // Create event storage
    let repository: SharedEventRepository = match config.calendar.storage {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory event storage");
            Arc::new(InMemoryEventRepository::new())
        }
        StorageBackend::Sqlite => {
            let repository =
                SqliteEventRepository::connect(&config.database.url, config.database.max_connections)
                    .await
                    .context("Failed to open event database")?;
            tracing::info!("Connected to database, migrations completed");
            Arc::new(repository)
        }
    };

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create services and application state
    let categories = CategoryCatalog::new(&config.calendar.categories);
    let services = Services::new(repository, categories);
    let state = AppState::new(config, services);

    let views = state.calendar.views();
    let add_view = views.add_event.clone();
    add_view.subscribe({
        let view = add_view.clone();
        move || tracing::debug!(state = ?view.state(), "add-event view updated")
    });
    let edit_view = views.edit_event.clone();
    edit_view.subscribe({
        let view = edit_view.clone();
        move || tracing::debug!(state = ?view.state(), "edit-event view updated")
    });
    let delete_view = views.delete_event.clone();
    delete_view.subscribe({
        let view = delete_view.clone();
        move || tracing::debug!(state = ?view.state(), "delete-event view updated")
    });

    // Build router
    let app = api::router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().context("Invalid host address")?,
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
