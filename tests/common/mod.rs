#![allow(dead_code, unused_imports, unused_macros)]

use actix_web::web;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

use invoice_generator::api::{ApiState, AppConfig};
use invoice_generator::core::{StoreError, StoreResult};
use invoice_generator::models::RenderedArtifact;
use invoice_generator::{
    Invoice, InvoiceId, InvoiceInput, InvoiceStore, InvoiceSummary, LineItem, SqliteInvoiceStore,
};

/// Builds an initialized actix test service for the given `web::Data<ApiState>`.
macro_rules! test_app {
    ($state:expr) => {{
        let state = $state;
        let public_dir = state.config.public_dir.clone();
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(state)
                .configure(invoice_generator::api::configure_routes)
                .configure(|cfg| invoice_generator::api::configure_static(cfg, &public_dir)),
        )
        .await
    }};
}
pub(crate) use test_app;

/// A temporary public/data layout with a real SQLite store.
pub struct TestContext {
    pub dir: TempDir,
    pub config: AppConfig,
    pub store: Arc<SqliteInvoiceStore>,
}

impl TestContext {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let config = config_in(dir.path());
        config
            .ensure_directories()
            .expect("failed to create test directories");
        let store = Arc::new(
            SqliteInvoiceStore::connect(&config.database_url)
                .await
                .expect("failed to open test store"),
        );

        TestContext { dir, config, store }
    }

    pub fn state(&self) -> web::Data<ApiState> {
        self.state_with_store(self.store.clone())
    }

    pub fn state_with_store(&self, store: Arc<dyn InvoiceStore>) -> web::Data<ApiState> {
        web::Data::new(ApiState::new(self.config.clone(), store))
    }

    /// Sorted file names currently in the generated directory.
    pub fn generated_files(&self) -> Vec<String> {
        let mut names: Vec<String> = match std::fs::read_dir(self.config.generated_dir()) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        names
    }
}

pub fn config_in(root: &Path) -> AppConfig {
    let public_dir = root.join("public").to_string_lossy().into_owned();
    let data_dir = root.join("data").to_string_lossy().into_owned();

    AppConfig::from_lookup(|key| match key {
        "PUBLIC_DIR" => Some(public_dir.clone()),
        "DATA_DIR" => Some(data_dir.clone()),
        _ => None,
    })
    .expect("test config is valid")
}

pub fn sample_invoice(id: &str, created_at: DateTime<Utc>) -> Invoice {
    let id = InvoiceId::new(id);
    let input = InvoiceInput {
        company_name: "Acme".to_string(),
        client_name: "Bob".to_string(),
        items: vec![LineItem {
            description: "Widget".to_string(),
            qty: 2.0,
            price: 5.0,
        }],
    };
    let artifact = RenderedArtifact {
        filename: id.filename(),
        path: Path::new("public/generated").join(id.filename()),
        url: format!("/generated/{}", id.filename()),
    };
    Invoice::new(id, created_at, input, artifact)
}

/// A store whose every operation fails, as a dead disk would.
pub struct FailingStore;

#[async_trait]
impl InvoiceStore for FailingStore {
    async fn insert(&self, _invoice: &Invoice) -> StoreResult<()> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn list_recent(&self, _limit: u32) -> StoreResult<Vec<InvoiceSummary>> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }
}
