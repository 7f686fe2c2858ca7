use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::core::{StoreError, StoreResult};
use crate::models::{Invoice, InvoiceSummary};

/// Append-only persistence of generated invoices. Records are never updated
/// or deleted.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Inserts one invoice as a single row. Fails with
    /// [`StoreError::Duplicate`] if the id is already taken.
    async fn insert(&self, invoice: &Invoice) -> StoreResult<()>;

    /// Newest first, at most `limit` rows.
    async fn list_recent(&self, limit: u32) -> StoreResult<Vec<InvoiceSummary>>;

    async fn ping(&self) -> StoreResult<()>;
}

#[derive(Clone)]
pub struct SqliteInvoiceStore {
    pool: SqlitePool,
}

impl SqliteInvoiceStore {
    /// Opens (creating if needed) the database at `database_url` and makes
    /// sure the schema exists.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = SqliteInvoiceStore { pool };
        store.migrate().await?;
        Ok(store)
    }

    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS invoices (
                id           TEXT PRIMARY KEY,
                created_at   TEXT NOT NULL,
                company_name TEXT NOT NULL,
                client_name  TEXT NOT NULL,
                items        TEXT NOT NULL,
                total        REAL NOT NULL,
                pdf_path     TEXT NOT NULL,
                pdf_url      TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_invoices_created_at ON invoices (created_at)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl InvoiceStore for SqliteInvoiceStore {
    async fn insert(&self, invoice: &Invoice) -> StoreResult<()> {
        let items = serde_json::to_string(&invoice.items)?;

        sqlx::query(
            r#"
            INSERT INTO invoices (id, created_at, company_name, client_name, items, total, pdf_path, pdf_url)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(invoice.id.as_str())
        .bind(invoice.created_at_iso())
        .bind(&invoice.company_name)
        .bind(&invoice.client_name)
        .bind(items)
        .bind(invoice.total)
        .bind(&invoice.pdf_path)
        .bind(&invoice.pdf_url)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::from_insert(e, invoice.id.as_str()))?;

        Ok(())
    }

    async fn list_recent(&self, limit: u32) -> StoreResult<Vec<InvoiceSummary>> {
        // rowid breaks ties between invoices created in the same millisecond
        let rows = sqlx::query_as::<_, InvoiceSummary>(
            r#"
            SELECT id, created_at, company_name, client_name, total, pdf_url
            FROM invoices
            ORDER BY created_at DESC, rowid DESC
            LIMIT ?1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
