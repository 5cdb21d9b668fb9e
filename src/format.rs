//! Output format selection for chatlens reports.
//!
//! Library-level format type with no CLI framework dependency. Each format
//! renders a different slice of a [`ChatReport`]:
//!
//! | Format | Renders |
//! |--------|---------|
//! | [`Json`](OutputFormat::Json) | analytics in a `{"success": true, "data": ...}` envelope |
//! | [`Csv`](OutputFormat::Csv) | per-user table |
//! | [`Jsonl`](OutputFormat::Jsonl) | parsed messages, one per line |
//! | [`Text`](OutputFormat::Text) | human-readable summary |
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::config::ReportConfig;
//! use chatlens::core::{FilterConfig, process};
//! use chatlens::format::{OutputFormat, to_format_string};
//! use chatlens::parser::TranscriptParser;
//!
//! let report = process(
//!     "1/2/23, 10:30 AM - Alice: Hello",
//!     &TranscriptParser::new(),
//!     &FilterConfig::new(),
//! );
//! let csv = to_format_string(&report, OutputFormat::Csv, &ReportConfig::default())?;
//! assert!(csv.starts_with("User;Messages"));
//!
//! let format = OutputFormat::from_path("report.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::core::models::ChatReport;
use crate::core::output::{to_summary, write_summary};
use crate::error::ChatlensError;

/// Output format for a chat report.
///
/// # Example
///
/// ```rust
/// use chatlens::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("text").unwrap();
/// assert_eq!(format, OutputFormat::Text);
/// assert_eq!(format.extension(), "txt");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Analytics bundle in the success envelope (default)
    #[default]
    Json,

    /// Per-user table with semicolon delimiter
    Csv,

    /// Parsed messages, one JSON object per line
    Jsonl,

    /// Plain-text summary with top-N tables
    Text,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Text => "txt",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "csv", "jsonl", "ndjson", "text", "txt"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Json,
            OutputFormat::Csv,
            OutputFormat::Jsonl,
            OutputFormat::Text,
        ]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::Csv => "text/csv",
            OutputFormat::Jsonl => "application/x-ndjson",
            OutputFormat::Text => "text/plain",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/report.TXT").unwrap(), OutputFormat::Text);
    /// assert!(OutputFormat::from_path("report.xml").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ChatlensError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "txt" | "text" => Ok(OutputFormat::Text),
            _ => Err(ChatlensError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: json, csv, jsonl, txt"),
            )),
        }
    }

    fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
            OutputFormat::Text => "none",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Text => write!(f, "Text"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a report to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    report: &ChatReport,
    path: &str,
    format: OutputFormat,
    config: &ReportConfig,
) -> Result<(), ChatlensError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(&report.analytics, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(&report.analytics, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(&report.messages, path),
        OutputFormat::Text => write_summary(&report.analytics, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Renders a report as a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    report: &ChatReport,
    format: OutputFormat,
    config: &ReportConfig,
) -> Result<String, ChatlensError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(&report.analytics),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(&report.analytics),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(&report.messages),
        OutputFormat::Text => Ok(to_summary(&report.analytics, config)),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[allow(dead_code)]
fn missing_feature(format: OutputFormat) -> ChatlensError {
    ChatlensError::invalid_format(
        "output",
        format!(
            "Output format {format:?} requires the '{}' feature to be enabled",
            format.required_feature()
        ),
    )
}
