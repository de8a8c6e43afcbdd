//! Data module - typed records, CSV loading and export

mod export;
mod loader;
mod record;

pub use export::write_csv;
pub use loader::{load_csv, DataError};
pub use record::{Dataset, Record, COLUMNS, NUMERIC_COLUMNS};
