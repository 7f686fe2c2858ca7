pub mod id;
pub mod pdf;

pub use id::{now_millis, InvoiceIdGenerator};
pub use pdf::{item_line, InvoiceRenderer};
