use actix_files::Files;
use actix_web::{middleware::Compress, web, HttpResponse};
use std::path::Path;

use super::handlers;
use super::state::ApiState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health checks
        .route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check))
        .route("/metrics", web::get().to(metrics_endpoint))

        // Invoice API
        .service(
            web::scope("/api")
                .wrap(Compress::default())
                .route("/generate", web::post().to(handlers::generate_invoice))
                .route("/invoices", web::get().to(handlers::list_invoices))
                .route("/payment/simulate", web::post().to(handlers::simulate_payment)),
        );
}

/// Serves `public_dir` at the root, generated PDFs included. Register last:
/// it matches every path.
pub fn configure_static(cfg: &mut web::ServiceConfig, public_dir: &Path) {
    cfg.service(Files::new("/", public_dir).index_file("index.html"));
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy"
    }))
}

async fn readiness_check(state: web::Data<ApiState>) -> HttpResponse {
    match state.store.ping().await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ready"
        })),
        Err(e) => {
            tracing::warn!("Store not ready: {}", e);
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "not_ready"
            }))
        }
    }
}

async fn metrics_endpoint() -> HttpResponse {
    use prometheus::{Encoder, TextEncoder};

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = vec![];

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return HttpResponse::InternalServerError().finish();
    }

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(buffer)
}
