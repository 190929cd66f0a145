// Service exports
pub mod fileio;

pub use fileio::{load_csv, parse_rate_sheet, save_csv, DEFAULT_OUTPUT_PATH, HEADER};
