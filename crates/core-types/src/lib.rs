pub mod error;
pub mod prices;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use prices::{Price, PriceTable};
