//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! The parsed [`Args`] convert into library configuration via
//! [`Args::parser_config`], [`Args::filter_config`] and
//! [`Args::report_config`], so the binary holds no policy of its own.
//!
//! ```rust
//! use chatlens::cli::{Args, OutputFormat};
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatlens", "chat.txt", "-f", "csv", "--from", "alice"]);
//! assert_eq!(args.format, OutputFormat::Csv);
//! assert!(args.filter_config().unwrap().is_active());
//! ```

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{ParserConfig, ReportConfig};
use crate::core::FilterConfig;
use crate::error::Result;

/// Analyze a WhatsApp text export: message counts, mentions, media and
/// social-media links per participant.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt -f text --top 10
    chatlens chat.txt -o users.csv -f csv
    chatlens chat.txt --after 2024-01-01 --from Alice
    RUST_LOG=chatlens=trace chatlens chat.txt -f jsonl")]
pub struct Args {
    /// Path to the exported transcript (.txt)
    pub input: String,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Only analyze messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only analyze messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Only analyze messages from this sender (case-insensitive)
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Keep system notices as ordinary messages
    #[arg(long)]
    pub keep_system: bool,

    /// Rows per ranking table in text output
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parser configuration implied by the flags.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new().with_skip_system_messages(!self.keep_system)
    }

    /// Filter configuration implied by the flags.
    ///
    /// Fails on a malformed `--after` / `--before` date.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut filter = FilterConfig::new();
        if let Some(ref after) = self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            filter = filter.with_date_to(before)?;
        }
        if let Some(ref from) = self.from {
            filter = filter.with_sender(from.clone());
        }
        Ok(filter)
    }

    /// Report configuration implied by the flags.
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig::new().with_top(self.top)
    }

    /// Default log directive for the verbosity level.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Output format options.
///
/// - [`Json`](OutputFormat::Json) - analytics envelope (default)
/// - [`Csv`](OutputFormat::Csv) - per-user table
/// - [`Jsonl`](OutputFormat::Jsonl) - parsed messages
/// - [`Text`](OutputFormat::Text) - readable summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{"success": true, "data": ...}` analytics envelope
    #[default]
    Json,

    /// Per-user table with semicolon delimiter
    Csv,

    /// One parsed message per line
    #[value(alias = "ndjson")]
    Jsonl,

    /// Summary with top-N tables
    #[value(alias = "txt")]
    Text,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::format::OutputFormat::from(*self).fmt(f)
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
            OutputFormat::Text => crate::format::OutputFormat::Text,
        }
    }
}
