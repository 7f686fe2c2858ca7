use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

use crate::core::{format_amount, format_quantity, PdfConfig, RenderError, RenderResult};
use crate::models::{InvoiceId, InvoiceInput, LineItem, RenderedArtifact};
use crate::pdf::{Page, PdfBuilder, PdfGenerator};

/// Renders invoices to PDF files inside a public directory.
pub struct InvoiceRenderer {
    output_dir: PathBuf,
    url_prefix: String,
    config: PdfConfig,
}

impl InvoiceRenderer {
    /// `url_prefix` is the public path `output_dir` is served under, e.g. `/generated`.
    pub fn new(output_dir: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        InvoiceRenderer {
            output_dir: output_dir.into(),
            url_prefix: url_prefix.into(),
            config: PdfConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PdfConfig) -> Self {
        self.config = config;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Fixed invoice layout: title, parties and date, numbered items, total.
    pub fn layout(
        &self,
        created_at: &DateTime<Utc>,
        input: &InvoiceInput,
    ) -> Vec<Page> {
        let items: Vec<String> = input.items.iter().map(item_line).collect();

        let mut builder = PdfBuilder::new(self.config.clone());
        builder
            .add_title("Invoice")
            .add_line_break()
            .add_paragraph(&format!("From: {}", input.company_name))
            .add_paragraph(&format!("To: {}", input.client_name))
            .add_paragraph(&format!("Date: {}", created_at.format("%Y-%m-%d")))
            .add_line_break()
            .add_paragraph("Items:")
            .add_list(&items)
            .add_line_break()
            .add_right_aligned(&format!("Total: {}", format_amount(input.total())), true);
        builder.build()
    }

    /// Renders and writes `invoice-<id>.pdf`. Returns once the file is flushed
    /// to disk under its final name.
    pub async fn render(
        &self,
        id: &InvoiceId,
        created_at: &DateTime<Utc>,
        input: &InvoiceInput,
    ) -> RenderResult<RenderedArtifact> {
        let pages = self.layout(created_at, input);
        let config = self.config.clone();
        let title = format!("Invoice {}", id);

        let bytes = tokio::task::spawn_blocking(move || {
            PdfGenerator::new(config).render(&title, &pages)
        })
        .await
        .map_err(|e| RenderError::Task(e.to_string()))??;

        tokio::fs::create_dir_all(&self.output_dir).await?;

        let filename = id.filename();
        let path = self.output_dir.join(&filename);
        write_atomically(&path, &bytes).await?;

        tracing::debug!("Wrote {} ({} bytes)", path.display(), bytes.len());

        Ok(RenderedArtifact {
            url: format!("{}/{}", self.url_prefix.trim_end_matches('/'), filename),
            filename,
            path,
        })
    }
}

/// `Widget — 2 x 5 = 10.00`
pub fn item_line(item: &LineItem) -> String {
    format!(
        "{} — {} x {} = {}",
        item.description,
        format_quantity(item.qty),
        format_quantity(item.price),
        format_amount(item.line_total())
    )
}

// Writes to a sibling `.part` file and renames it into place, so a failed
// write never leaves a file under the final name.
async fn write_atomically(path: &Path, bytes: &[u8]) -> RenderResult<()> {
    let partial = path.with_extension("pdf.part");

    let written = match write_and_sync(&partial, bytes).await {
        Ok(()) => tokio::fs::rename(&partial, path).await,
        Err(e) => Err(e),
    };

    if let Err(e) = written {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e.into());
    }
    Ok(())
}

async fn write_and_sync(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    file.sync_all().await
}
