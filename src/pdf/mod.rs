pub mod builder;
pub mod generator;

pub use builder::{wrap_text, Align, Page, PdfBuilder, TextLine};
pub use generator::PdfGenerator;
