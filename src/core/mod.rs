pub mod config;
pub mod error;
pub mod format;

pub use config::*;
pub use error::*;
pub use format::*;
