pub mod invoice_store;

pub use invoice_store::{InvoiceStore, SqliteInvoiceStore};
