use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

use dmaker_api::api::router::build_router;
use dmaker_api::application::DeveloperService;
use dmaker_api::config::{AppConfig, StorageBackend};
use dmaker_api::domain::repositories::DeveloperRepository;
use dmaker_api::infrastructure::repositories::{
    InMemoryDeveloperRepository, PostgresDeveloperRepository,
};
use dmaker_api::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    telemetry::init_tracing();

    let config = AppConfig::from_env()?;

    let repository: Arc<dyn DeveloperRepository> = match config.storage_backend {
        StorageBackend::Postgres => {
            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;

            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Database connected and migrated");

            Arc::new(PostgresDeveloperRepository::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, records are lost on shutdown");
            Arc::new(InMemoryDeveloperRepository::new())
        }
    };

    let app = build_router(Arc::new(DeveloperService::new(repository)));

    // Start server
    tracing::info!("Server listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
