//! Core data models shared by the pipeline and the output writers.

use serde::Serialize;

use crate::Message;
use crate::analytics::AnalyticsResult;
use crate::parser::ParseStats;

/// Everything produced for one transcript: the messages that were analysed,
/// their analytics, and bookkeeping from the parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatReport {
    /// Parsed (and filtered) messages, in transcript order.
    pub messages: Vec<Message>,
    /// Analytics computed over `messages`.
    pub analytics: AnalyticsResult,
    /// Pipeline counters.
    pub stats: ProcessingStats,
}

/// Statistics about one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingStats {
    /// Counters from the parser.
    pub parse: ParseStats,
    /// Messages produced by the parser.
    pub parsed_count: usize,
    /// Messages left after filtering.
    pub filtered_count: usize,
}

impl ProcessingStats {
    /// Percentage of parsed messages removed by filters.
    pub fn filtered_out_ratio(&self) -> f64 {
        if self.parsed_count == 0 {
            return 0.0;
        }
        (1.0 - (self.filtered_count as f64 / self.parsed_count as f64)) * 100.0
    }
}
