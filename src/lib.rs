pub mod api;
pub mod core;
pub mod generators;
pub mod models;
pub mod pdf;
pub mod storage;

// Re-export commonly used types
pub use models::{
    Invoice, InvoiceId, InvoiceInput, InvoiceSummary, LineItem,
    PaymentSimulation,
};

pub use generators::{InvoiceIdGenerator, InvoiceRenderer};
pub use storage::{InvoiceStore, SqliteInvoiceStore};
