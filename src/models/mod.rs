pub mod invoice;
pub mod normalize;
pub mod payment;

pub use invoice::*;
pub use normalize::{normalize_invoice, parse_payload};
pub use payment::*;
