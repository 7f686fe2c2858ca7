use once_cell::sync::Lazy;
use prometheus::{register_histogram, register_int_counter_vec, Histogram, IntCounterVec};

pub static INVOICE_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "invoice_requests_total",
        "Invoice generation requests by outcome",
        &["outcome"]
    )
    .expect("invoice_requests_total is registered once")
});

pub static RENDER_SECONDS: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "invoice_render_seconds",
        "Time spent rendering and writing invoice PDFs"
    )
    .expect("invoice_render_seconds is registered once")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Generated,
    Invalid,
    RenderFailed,
    StoreFailed,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Generated => "generated",
            Outcome::Invalid => "invalid",
            Outcome::RenderFailed => "render_failed",
            Outcome::StoreFailed => "store_failed",
        }
    }
}

pub fn record(outcome: Outcome) {
    INVOICE_REQUESTS.with_label_values(&[outcome.as_str()]).inc();
}
