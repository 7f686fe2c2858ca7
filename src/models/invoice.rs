use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::core::round_cents;

/// Listing responses never return more than this many invoices.
pub const RECENT_INVOICES_LIMIT: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(String);

impl InvoiceId {
    pub fn new(id: impl Into<String>) -> Self {
        InvoiceId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Artifact filename, unique because the id is.
    pub fn filename(&self) -> String {
        format!("invoice-{}.pdf", self.0)
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub qty: f64,
    pub price: f64,
}

impl LineItem {
    pub fn line_total(&self) -> f64 {
        self.qty * self.price
    }
}

/// A normalized invoice payload: both parties named and at least one item.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceInput {
    pub company_name: String,
    pub client_name: String,
    pub items: Vec<LineItem>,
}

impl InvoiceInput {
    pub fn total(&self) -> f64 {
        round_cents(self.items.iter().map(LineItem::line_total).sum())
    }
}

/// Where a rendered invoice landed on disk and how clients can fetch it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedArtifact {
    pub filename: String,
    pub path: PathBuf,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub created_at: DateTime<Utc>,
    pub company_name: String,
    pub client_name: String,
    pub items: Vec<LineItem>,
    pub total: f64,
    pub pdf_path: String,
    pub pdf_url: String,
}

impl Invoice {
    pub fn new(
        id: InvoiceId,
        created_at: DateTime<Utc>,
        input: InvoiceInput,
        artifact: RenderedArtifact,
    ) -> Self {
        let total = input.total();
        Invoice {
            id,
            created_at,
            company_name: input.company_name,
            client_name: input.client_name,
            items: input.items,
            total,
            pdf_path: artifact.path.to_string_lossy().into_owned(),
            pdf_url: artifact.url,
        }
    }

    pub fn created_at_iso(&self) -> String {
        iso_timestamp(&self.created_at)
    }
}

/// ISO-8601 with millisecond precision, e.g. `2026-10-18T09:30:00.000Z`.
/// Fixed width, so lexical order matches chronological order.
pub fn iso_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Listing projection of a stored invoice. Line items are left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct InvoiceSummary {
    pub id: String,
    pub created_at: String,
    pub company_name: String,
    pub client_name: String,
    pub total: f64,
    pub pdf_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub ok: bool,
    pub id: InvoiceId,
    pub url: String,
    pub total: f64,
}

impl From<&Invoice> for GenerateResponse {
    fn from(invoice: &Invoice) -> Self {
        GenerateResponse {
            ok: true,
            id: invoice.id.clone(),
            url: invoice.pdf_url.clone(),
            total: invoice.total,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceListResponse {
    pub ok: bool,
    pub invoices: Vec<InvoiceSummary>,
}
