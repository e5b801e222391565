//! Core data structures shared by the code and QR pipelines.

mod exchange_id;
mod grid;

pub use exchange_id::{ExchangeId, ID_BYTES};
pub use grid::ModuleGrid;
