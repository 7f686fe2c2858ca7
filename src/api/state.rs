use anyhow::Context;
use std::path::PathBuf;
use std::sync::Arc;

use crate::generators::{InvoiceIdGenerator, InvoiceRenderer};
use crate::storage::InvoiceStore;

/// Public path the generated directory is served under.
pub const GENERATED_URL_PREFIX: &str = "/generated";

#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<dyn InvoiceStore>,
    pub renderer: Arc<InvoiceRenderer>,
    pub ids: Arc<InvoiceIdGenerator>,
    pub config: Arc<AppConfig>,
}

impl ApiState {
    pub fn new(config: AppConfig, store: Arc<dyn InvoiceStore>) -> Self {
        let renderer = InvoiceRenderer::new(config.generated_dir(), GENERATED_URL_PREFIX);

        ApiState {
            store,
            renderer: Arc::new(renderer),
            ids: Arc::new(InvoiceIdGenerator::new()),
            config: Arc::new(config),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub public_dir: PathBuf,
    pub data_dir: PathBuf,
    pub database_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = PathBuf::from("data");
        AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            public_dir: PathBuf::from("public"),
            database_url: default_database_url(&data_dir),
            data_dir,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = AppConfig::default();

        let port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {:?}", port))?,
            None => defaults.port,
        };

        let data_dir = lookup("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir);
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| default_database_url(&data_dir));

        Ok(AppConfig {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            public_dir: lookup("PUBLIC_DIR").map(PathBuf::from).unwrap_or(defaults.public_dir),
            data_dir,
            database_url,
        })
    }

    pub fn generated_dir(&self) -> PathBuf {
        self.public_dir.join("generated")
    }

    /// Creates the artifact and record directories if they are missing.
    pub fn ensure_directories(&self) -> anyhow::Result<()> {
        for dir in [self.generated_dir(), self.data_dir.clone()] {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create directory {}", dir.display()))?;
        }
        Ok(())
    }
}

fn default_database_url(data_dir: &std::path::Path) -> String {
    format!("sqlite://{}", data_dir.join("invoices.db").display())
}
