//! Delimited-text tokenizer for per-sheet spreadsheet exports
//!
//! Sheet exports are comma-separated with optional double-quote quoting and
//! doubled-quote escaping. Nothing else about the layout is known at this
//! level: header rows, column meaning and row widths are sheet-specific and
//! handled by [`sheet_adapters`](crate::app::services::sheet_adapters).
//!
//! ## Architecture
//!
//! - [`line`] - quote-aware splitting of one line into fields, and its inverse
//! - [`table`] - splitting raw sheet text into rows with blank-line removal
//!
//! ## Usage
//!
//! ```rust
//! use league_standings::app::services::csv_table::{parse_line, SheetTable};
//!
//! assert_eq!(parse_line("a,b,"), vec!["a", "b", ""]);
//!
//! let table = SheetTable::parse("name,team\n\nalice,APX\n");
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.cell(1, 1), "APX");
//! ```

pub mod line;
pub mod table;

#[cfg(test)]
pub mod tests;

pub use line::{parse_line, serialize_line};
pub use table::{SheetTable, parse_table};
