//! Configuration types for parsing and reporting.
//!
//! These are plain builder-style structs with no CLI framework dependencies.
//!
//! - [`ParserConfig`] - how the transcript parser treats system notices
//! - [`ReportConfig`] - how much the text summary shows
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::ParserConfig;
//! use chatlens::parser::TranscriptParser;
//!
//! let config = ParserConfig::new().with_notice_marker("missed voice call");
//! let parser = TranscriptParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for transcript parsing.
///
/// The default configuration drops every system notice recognised by the
/// built-in marker table and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Drop messages whose folded body is a system notice (default: true)
    pub skip_system_messages: bool,

    /// Additional case-insensitive notice markers (default: empty)
    #[serde(default)]
    pub extra_notice_markers: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            skip_system_messages: true,
            extra_notice_markers: Vec::new(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether system notices are dropped.
    #[must_use]
    pub fn with_skip_system_messages(mut self, skip: bool) -> Self {
        self.skip_system_messages = skip;
        self
    }

    /// Adds an extra notice marker.
    #[must_use]
    pub fn with_notice_marker(mut self, marker: impl Into<String>) -> Self {
        self.extra_notice_markers.push(marker.into());
        self
    }
}

/// Configuration for the human-readable summary report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Maximum rows per ranking table (default: 5)
    pub top: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { top: 5 }
    }
}

impl ReportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of rows shown per ranking table.
    #[must_use]
    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_default() {
        let config = ParserConfig::default();
        assert!(config.skip_system_messages);
        assert!(config.extra_notice_markers.is_empty());
    }

    #[test]
    fn test_parser_config_builder() {
        let config = ParserConfig::new()
            .with_skip_system_messages(false)
            .with_notice_marker("missed call")
            .with_notice_marker("waiting for this message");

        assert!(!config.skip_system_messages);
        assert_eq!(config.extra_notice_markers.len(), 2);
    }

    #[test]
    fn test_parser_config_deserialize_defaults_markers() {
        let config: ParserConfig =
            serde_json::from_str(r#"{"skip_system_messages":false}"#).unwrap();
        assert!(!config.skip_system_messages);
        assert!(config.extra_notice_markers.is_empty());
    }

    #[test]
    fn test_report_config() {
        assert_eq!(ReportConfig::default().top, 5);
        assert_eq!(ReportConfig::new().with_top(10).top, 10);
    }
}
