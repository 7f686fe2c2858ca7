use actix_web::{web, HttpResponse};
use chrono::Utc;

use super::error::ApiResult;
use super::metrics::{self, Outcome};
use super::state::ApiState;
use crate::generators::now_millis;
use crate::models::{
    normalize_invoice, parse_payload, GenerateResponse, Invoice, InvoiceListResponse,
    PaymentSimulation, RECENT_INVOICES_LIMIT,
};

/// Generate an invoice PDF and record it
pub async fn generate_invoice(
    body: web::Bytes,
    state: web::Data<ApiState>,
) -> ApiResult<HttpResponse> {
    let invoice = create_invoice(&body, &state).await?;
    Ok(HttpResponse::Ok().json(GenerateResponse::from(&invoice)))
}

/// List the most recent invoices, newest first
pub async fn list_invoices(state: web::Data<ApiState>) -> ApiResult<HttpResponse> {
    let invoices = state
        .store
        .list_recent(RECENT_INVOICES_LIMIT)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list invoices: {}", e);
            e
        })?;

    Ok(HttpResponse::Ok().json(InvoiceListResponse { ok: true, invoices }))
}

/// Payment stub: always reports the payment as done
pub async fn simulate_payment() -> HttpResponse {
    HttpResponse::Ok().json(PaymentSimulation::paid(now_millis()))
}

// Received -> Validated -> Rendering -> Persisted. Any failure ends the request.
async fn create_invoice(body: &[u8], state: &ApiState) -> ApiResult<Invoice> {
    let input = parse_payload(body)
        .and_then(|payload| normalize_invoice(&payload))
        .map_err(|e| {
            tracing::info!("Rejected invoice request: {}", e);
            metrics::record(Outcome::Invalid);
            e
        })?;

    let id = state.ids.next_id();
    let created_at = Utc::now();
    tracing::info!(invoice_id = %id, items = input.items.len(), "Rendering invoice");

    let timer = metrics::RENDER_SECONDS.start_timer();
    let rendered = state.renderer.render(&id, &created_at, &input).await;
    timer.observe_duration();

    let artifact = rendered.map_err(|e| {
        tracing::error!(invoice_id = %id, "Failed to render invoice: {}", e);
        metrics::record(Outcome::RenderFailed);
        e
    })?;

    let invoice = Invoice::new(id, created_at, input, artifact);

    // The artifact stays on disk if this fails.
    state.store.insert(&invoice).await.map_err(|e| {
        tracing::error!(
            invoice_id = %invoice.id,
            "Failed to persist invoice, orphaned artifact at {}: {}",
            invoice.pdf_path,
            e
        );
        metrics::record(Outcome::StoreFailed);
        e
    })?;

    metrics::record(Outcome::Generated);
    tracing::info!(invoice_id = %invoice.id, total = invoice.total, "Invoice generated");

    Ok(invoice)
}
