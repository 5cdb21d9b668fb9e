//! Output writers for analytics results and parsed messages.
//!
//! - [`write_json`] / [`to_json`] - `{"success": true, "data": ...}` envelope - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - per-user table, semicolon delimited - requires `csv-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one parsed message per line - requires `json-output` feature
//! - [`write_summary`] / [`to_summary`] - plain-text report, always available
//!
//! # Choosing a Format
//!
//! | Format | Contents | Use Case |
//! |--------|----------|----------|
//! | JSON | Full analytics bundle | APIs, dashboards |
//! | CSV | One row per user | Spreadsheets |
//! | JSONL | Parsed messages | Further processing, RAG |
//! | Text | Totals and top-N tables | Reading in a terminal |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::analytics::analyze;
//! use chatlens::core::output::{to_csv, write_json};
//!
//! let messages = chatlens::parse("1/2/23, 10:30 AM - Alice: Hello @Bob");
//! let analytics = analyze(&messages);
//!
//! write_json(&analytics, "report.json")?;
//! let table = to_csv(&analytics)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
mod summary;

#[cfg(feature = "csv-output")]
pub use csv_writer::{CSV_HEADER, to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{SuccessResponse, to_error_json, to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
pub use summary::{to_summary, write_summary};
