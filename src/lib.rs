//! # chatlens
//!
//! Analytics for exported chat transcripts in the WhatsApp plain-text format.
//!
//! ## Overview
//!
//! A transcript is a sequence of lines. Lines that look like
//!
//! ```text
//! 1/2/23, 10:30 AM - Alice: Hello @Bob
//! ```
//!
//! start a new message; every other non-empty line continues the previous
//! one. chatlens turns that text into [`Message`] values, then reduces them
//! into an [`AnalyticsResult`]:
//!
//! - messages per participant
//! - a mention graph (who mentions whom)
//! - media messages per participant
//! - social-media links per participant and platform
//!
//! Parsing and analysis are pure and infallible. Errors only appear at the
//! edges: decoding bytes, reading files and writing output.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::{analyze, parse};
//!
//! let messages = parse(
//!     "1/2/23, 10:30 AM - Alice: Hello @Bob check instagram.com/alice\n\
//!      1/2/23, 10:31 AM - Bob: <Media omitted>",
//! );
//! let result = analyze(&messages);
//!
//! assert_eq!(result.total_users, 2);
//! assert_eq!(result.mentions.mentions_received.get("Bob"), Some(1));
//! ```
//!
//! ## Pipeline with filters and output
//!
//! ```rust,no_run
//! # #[cfg(feature = "json-output")]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::prelude::*;
//!
//! let bytes = std::fs::read("chat.txt")?;
//! let filter = FilterConfig::new().with_date_from("2024-01-01")?;
//! let report = process_bytes(bytes, &TranscriptParser::new(), &filter)?;
//!
//! write_json(&report.analytics, "report.json")?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "json-output"))]
//! # fn main() {}
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser) and [`parse`]
//! - [`parsing`] - header pattern, system notices, timestamp interpretation
//! - [`analytics`] - [`analyze`] and the individual views
//! - [`config`] - parser and report configuration
//! - [`core`] - filtering, the processing pipeline and output writers
//! - [`format`] - output format selection
//! - [`cli`] - CLI types (requires the `cli` feature)
//! - [`error`] - [`ChatlensError`], [`Result`]
//! - [`prelude`] - convenient re-exports

pub mod analytics;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

pub use analytics::{AnalyticsResult, analyze};
pub use error::{ChatlensError, Result};
pub use message::Message;
pub use parser::parse;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{ChatlensError, ErrorResponse, Result};

    pub use crate::parser::{ParseStats, TranscriptParser, parse};

    pub use crate::analytics::{
        AnalyticsResult, Mentions, RankedCounts, SocialLinks, SocialPlatform, analyze,
    };

    pub use crate::config::{ParserConfig, ReportConfig};

    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::models::{ChatReport, ProcessingStats};
    pub use crate::core::processor::{process, process_bytes};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
    pub use crate::core::output::{to_summary, write_summary};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
