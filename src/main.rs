use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Result;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use invoice_generator::api::{configure_routes, configure_static, ApiState, AppConfig};
use invoice_generator::storage::SqliteInvoiceStore;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    tracing::info!("Starting Invoice Generator API");

    prometheus::default_registry()
        .register(Box::new(prometheus::process_collector::ProcessCollector::for_self()))?;

    let config = AppConfig::from_env()?;
    config.ensure_directories()?;

    // One store handle for the whole process, closed on shutdown
    let store = Arc::new(SqliteInvoiceStore::connect(&config.database_url).await?);
    let state = web::Data::new(ApiState::new(config.clone(), store.clone()));

    tracing::info!("Prototype server running on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        let public_dir = state.config.public_dir.clone();
        App::new()
            .app_data(state.clone())
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_routes)
            .configure(|cfg| configure_static(cfg, &public_dir))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    store.close().await;
    tracing::info!("Invoice store closed");

    Ok(())
}
