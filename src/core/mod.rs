//! The processing pipeline between raw transcript text and rendered output.
//!
//! - [`filter`] - date and sender filtering of parsed messages
//! - [`models`] - [`ChatReport`] and pipeline counters
//! - [`processor`] - parse → filter → analyze
//! - [`output`] - format writers (JSON, CSV, JSONL, text)
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::core::{FilterConfig, process};
//! use chatlens::parser::TranscriptParser;
//!
//! let filter = FilterConfig::new().with_sender("alice");
//! let report = process(
//!     "1/2/23, 10:30 AM - Alice: Hi\n1/2/23, 10:31 AM - Bob: Hey",
//!     &TranscriptParser::new(),
//!     &filter,
//! );
//! assert_eq!(report.analytics.users, vec!["Alice"]);
//! ```

pub mod filter;
pub mod models;
pub mod output;
pub mod processor;

pub use filter::{FilterConfig, apply_filters};
pub use models::{ChatReport, ProcessingStats};
pub use processor::{process, process_bytes};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
pub use output::{to_summary, write_summary};
