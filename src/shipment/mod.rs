//! Shipment line items and CSV loading

mod data;
pub mod loader;

pub use data::{BoeRecord, LineItem};
pub use loader::{load_line_items, load_line_items_from_reader, DEFAULT_LINES_PATH};
