//! Transcript parser.
//!
//! Turns raw transcript text into an ordered list of [`Message`]s.
//!
//! The scan is a single pass over the lines with one pending message:
//!
//! 1. A header line finalizes the pending message (if any) and opens a new one.
//! 2. A non-blank, non-header line is folded into the pending body with one space.
//! 3. Blank lines and lines before the first header are dropped.
//! 4. At end of input the pending message is finalized.
//!
//! Finalizing drops the message when its fully folded body is a system notice
//! (see [`notice`](crate::parsing::notice)). The check runs on the folded body
//! so a marker that only appears in a wrapped line still counts.
//!
//! Parsing never fails: malformed lines are absorbed, not reported.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::TranscriptParser;
//!
//! let text = "1/2/23, 10:30 AM - Alice: Hello\n\
//!             and welcome\n\
//!             1/2/23, 10:32 AM - System: Alice added Carol";
//!
//! let messages = TranscriptParser::new().parse(text);
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].body, "Hello and welcome");
//! ```

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, trace};

use crate::Message;
use crate::config::ParserConfig;
use crate::error::{ChatlensError, Result};
use crate::parsing::{HeaderLine, NoticeFilter, classify_notice, match_header};

const UTF8_BOM: char = '\u{FEFF}';

/// Counters collected during one parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Total lines scanned.
    pub lines: usize,
    /// Lines that matched the header pattern.
    pub headers: usize,
    /// Lines folded into a pending message.
    pub continuations: usize,
    /// Blank lines seen while a message was pending.
    pub blank_lines: usize,
    /// Non-blank lines seen before the first header.
    pub orphan_lines: usize,
    /// Finalized messages dropped as system notices.
    pub notices_dropped: usize,
    /// Messages emitted.
    pub messages: usize,
}

/// The message currently being assembled.
struct Pending {
    sender: String,
    body: String,
    timestamp: String,
}

impl Pending {
    fn open(header: &HeaderLine<'_>) -> Self {
        Self {
            sender: header.sender.to_string(),
            body: header.body.to_string(),
            timestamp: header.timestamp(),
        }
    }

    fn fold(&mut self, line: &str) {
        self.body.push(' ');
        self.body.push_str(line);
    }

    fn into_message(self) -> Message {
        Message {
            sender: self.sender,
            body: self.body,
            timestamp: self.timestamp,
        }
    }
}

/// Parser for `M/D/YY, H:MM AM - Sender: Message` transcripts.
///
/// A parser holds no per-call state, so one instance can be shared freely
/// between threads and reused for any number of transcripts.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
    notices: NoticeFilter,
}

impl TranscriptParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        let notices = NoticeFilter::with_extra_markers(&config.extra_notice_markers);
        Self { config, notices }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses transcript text into messages, in header order.
    pub fn parse(&self, text: &str) -> Vec<Message> {
        self.parse_with_stats(text).0
    }

    /// Parses transcript text and also returns scan counters.
    pub fn parse_with_stats(&self, text: &str) -> (Vec<Message>, ParseStats) {
        let mut messages = Vec::new();
        let mut stats = ParseStats::default();
        let mut pending: Option<Pending> = None;

        for line in text.lines() {
            stats.lines += 1;

            if let Some(header) = match_header(line) {
                stats.headers += 1;
                if let Some(done) = pending.take() {
                    self.finalize(done, &mut messages, &mut stats);
                }
                pending = Some(Pending::open(&header));
                continue;
            }

            let trimmed = line.trim();
            match pending.as_mut() {
                Some(current) if !trimmed.is_empty() => {
                    current.fold(trimmed);
                    stats.continuations += 1;
                }
                Some(_) => stats.blank_lines += 1,
                None if !trimmed.is_empty() => stats.orphan_lines += 1,
                None => {}
            }
        }

        if let Some(done) = pending {
            self.finalize(done, &mut messages, &mut stats);
        }

        debug!(
            lines = stats.lines,
            headers = stats.headers,
            continuations = stats.continuations,
            orphan_lines = stats.orphan_lines,
            notices_dropped = stats.notices_dropped,
            messages = stats.messages,
            "parsed transcript"
        );

        (messages, stats)
    }

    /// Reads, decodes and parses a transcript file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Io`] if the file cannot be read and
    /// [`ChatlensError::Utf8`] if it is not valid UTF-8.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<Message>> {
        let bytes = fs::read(path)?;
        let text = decode_transcript(bytes)?;
        Ok(self.parse(&text))
    }

    fn finalize(&self, pending: Pending, out: &mut Vec<Message>, stats: &mut ParseStats) {
        if self.config.skip_system_messages && self.notices.matches(&pending.body) {
            trace!(
                sender = %pending.sender,
                timestamp = %pending.timestamp,
                kind = ?classify_notice(&pending.body),
                "dropped system notice"
            );
            stats.notices_dropped += 1;
            return;
        }

        stats.messages += 1;
        out.push(pending.into_message());
    }
}

/// Parses transcript text with the default configuration.
///
/// ```rust
/// let messages = chatlens::parse("1/2/23, 10:31 AM - Bob: <Media omitted>");
/// assert_eq!(messages[0].sender, "Bob");
/// ```
pub fn parse(text: &str) -> Vec<Message> {
    TranscriptParser::new().parse(text)
}

/// Decodes raw upload bytes into transcript text.
///
/// A leading UTF-8 byte order mark is removed so the first header line still
/// matches.
///
/// # Errors
///
/// Returns [`ChatlensError::Utf8`] if the bytes are not valid UTF-8.
pub fn decode_transcript(bytes: Vec<u8>) -> Result<String> {
    let text = String::from_utf8(bytes).map_err(|e| ChatlensError::utf8("transcript", e))?;

    Ok(match text.strip_prefix(UTF8_BOM) {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n  \n").is_empty());
    }

    #[test]
    fn test_no_headers() {
        let text = "just some text\nwith lines\nbut no timestamps";
        let (messages, stats) = TranscriptParser::new().parse_with_stats(text);
        assert!(messages.is_empty());
        assert_eq!(stats.orphan_lines, 3);
        assert_eq!(stats.headers, 0);
    }

    #[test]
    fn test_consecutive_headers() {
        let text = "1/2/23, 10:30 AM - Alice: First\n1/2/23, 10:31 AM - Bob: Second";
        let messages = parse(text);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], Message::new("Alice", "First", "1/2/23, 10:30 AM"));
        assert_eq!(messages[1], Message::new("Bob", "Second", "1/2/23, 10:31 AM"));
    }

    #[test]
    fn test_continuation_folding() {
        let text = "1/2/23, 10:30 AM - Alice: line one\n  line two  \nline three";
        let messages = parse(text);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].body, "line one line two line three");
    }

    #[test]
    fn test_blank_line_does_not_terminate() {
        let text = "1/2/23, 10:30 AM - Alice: one\n\n   \ntwo";
        let (messages, stats) = TranscriptParser::new().parse_with_stats(text);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].body, "one two");
        assert_eq!(stats.blank_lines, 2);
    }

    #[test]
    fn test_leading_lines_dropped() {
        let text = "exported chat\n\n1/2/23, 10:30 AM - Alice: Hi";
        let messages = parse(text);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].body, "Hi");
    }

    #[test]
    fn test_empty_header_body_opens_message() {
        let text = "1/2/23, 10:30 AM - Alice: \n1/2/23, 10:31 AM - Bob: hi";
        let messages = parse(text);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].body, "");

        // Folding into an empty body keeps the joining space.
        let messages = parse("1/2/23, 10:30 AM - Alice:\nwrapped");
        assert_eq!(messages[0].body, " wrapped");
    }

    #[test]
    fn test_system_notice_in_header_dropped() {
        let text = "1/2/23, 10:30 AM - Alice: Hi\n1/2/23, 10:32 AM - System: Alice added Carol";
        let (messages, stats) = TranscriptParser::new().parse_with_stats(text);
        assert_eq!(messages.len(), 1);
        assert_eq!(stats.notices_dropped, 1);
    }

    #[test]
    fn test_system_notice_in_continuation_dropped() {
        let text = "1/2/23, 10:30 AM - Alice: welcome\nCarol was ADDED\n1/2/23, 10:31 AM - Bob: ok";
        let messages = parse(text);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, "Bob");
    }

    #[test]
    fn test_keep_system_messages() {
        let config = ParserConfig::new().with_skip_system_messages(false);
        let parser = TranscriptParser::with_config(config);
        let messages = parser.parse("1/2/23, 10:32 AM - System: Alice added Carol");
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_extra_notice_marker() {
        let config = ParserConfig::new().with_notice_marker("missed voice call");
        let parser = TranscriptParser::with_config(config);
        let messages = parser.parse(
            "1/2/23, 10:30 AM - Alice: Missed voice call\n1/2/23, 10:31 AM - Bob: hey",
        );
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, "Bob");
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "1/2/23, 10:30 AM - Alice: Hi\r\nthere\r\n1/2/23, 10:31 AM - Bob: yo\r\n";
        let messages = parse(text);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].body, "Hi there");
        assert_eq!(messages[1].body, "yo");
    }

    #[test]
    fn test_stats_counts() {
        let text = "intro\n1/2/23, 10:30 AM - Alice: a\nb\n\n1/2/23, 10:31 AM - Bob: Bob left";
        let (_, stats) = TranscriptParser::new().parse_with_stats(text);
        assert_eq!(
            stats,
            ParseStats {
                lines: 5,
                headers: 2,
                continuations: 1,
                blank_lines: 1,
                orphan_lines: 1,
                notices_dropped: 1,
                messages: 1,
            }
        );
    }

    #[test]
    fn test_decode_transcript() {
        let text = decode_transcript("\u{FEFF}1/2/23, 10:30 AM - Alice: Hi".as_bytes().to_vec()).unwrap();
        assert!(text.starts_with("1/2/23"));

        let err = decode_transcript(vec![0xff, 0xfe, 0x00]).unwrap_err();
        assert!(err.is_utf8());
    }

    #[test]
    fn test_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.txt");
        std::fs::write(&path, "1/2/23, 10:30 AM - Alice: Hi").unwrap();

        let messages = TranscriptParser::new().parse_file(&path).unwrap();
        assert_eq!(messages.len(), 1);

        let missing = TranscriptParser::new().parse_file(dir.path().join("nope.txt"));
        assert!(missing.unwrap_err().is_io());
    }
}
