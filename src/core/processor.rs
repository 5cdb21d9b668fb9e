//! The parse → filter → analyze pipeline.
//!
//! This is the whole core as a caller sees it: raw text (or raw bytes) in,
//! a [`ChatReport`] out.
//!
//! ```rust
//! use chatlens::core::{FilterConfig, process};
//! use chatlens::parser::TranscriptParser;
//!
//! let report = process(
//!     "1/2/23, 10:30 AM - Alice: Hello\n1/2/23, 10:31 AM - Bob: Hi",
//!     &TranscriptParser::new(),
//!     &FilterConfig::new(),
//! );
//! assert_eq!(report.analytics.total_messages, 2);
//! ```

use super::filter::{FilterConfig, apply_filters};
use super::models::{ChatReport, ProcessingStats};
use crate::analytics::analyze;
use crate::error::Result;
use crate::parser::{TranscriptParser, decode_transcript};

/// Parses, filters and analyzes transcript text.
pub fn process(text: &str, parser: &TranscriptParser, filter: &FilterConfig) -> ChatReport {
    let (messages, parse_stats) = parser.parse_with_stats(text);
    let parsed_count = messages.len();

    let messages = apply_filters(messages, filter);
    let filtered_count = messages.len();

    let analytics = analyze(&messages);

    ChatReport {
        messages,
        analytics,
        stats: ProcessingStats {
            parse: parse_stats,
            parsed_count,
            filtered_count,
        },
    }
}

/// Decodes uploaded bytes as UTF-8, then runs [`process`].
///
/// # Errors
///
/// Returns [`ChatlensError::Utf8`](crate::ChatlensError::Utf8) if the bytes
/// are not valid UTF-8. Nothing is parsed in that case.
pub fn process_bytes(
    bytes: Vec<u8>,
    parser: &TranscriptParser,
    filter: &FilterConfig,
) -> Result<ChatReport> {
    let text = decode_transcript(bytes)?;
    Ok(process(&text, parser, filter))
}
