//! Filter messages by date range and sender before analysis.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering message collections.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Messages from specific user |
//!
//! # Examples
//!
//! ```
//! use chatlens::core::filter::{FilterConfig, apply_filters};
//! use chatlens::Message;
//!
//! # fn main() -> chatlens::Result<()> {
//! let messages = vec![
//!     Message::new("Alice", "Old", "1/2/23, 10:30 AM"),
//!     Message::new("Bob", "New", "6/15/24, 9:00 PM"),
//!     Message::new("Alice", "Newer", "6/16/24, 9:00 PM"),
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_sender("alice");
//!
//! let filtered = apply_filters(messages, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].body, "Newer");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Dates are read from the verbatim timestamp with
//!   [`Message::datetime`]; messages whose timestamp cannot be read are
//!   **excluded** when date filters are active
//! - Sender matching is case-insensitive for ASCII characters
//! - Multiple filters are combined with AND logic

use chrono::{NaiveDate, NaiveDateTime};

use crate::Message;
use crate::error::ChatlensError;

/// Configuration for filtering messages by date and sender.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only messages on or after this moment.
    pub after: Option<NaiveDateTime>,

    /// Include only messages on or before this moment.
    pub before: Option<NaiveDateTime>,

    /// Include only messages from this sender (case-insensitive).
    pub from: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        let date = parse_filter_date(date_str)?;
        let start = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| ChatlensError::invalid_date(date_str))?;
        self.after = Some(start);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        let date = parse_filter_date(date_str)?;
        // End of the day to include the full day
        let end = date
            .and_hms_opt(23, 59, 59)
            .ok_or_else(|| ChatlensError::invalid_date(date_str))?;
        self.before = Some(end);
        Ok(self)
    }

    /// Sets the sender filter. Matching is case-insensitive for ASCII.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.from = Some(sender.into());
        self
    }

    /// Sets the start moment directly.
    #[must_use]
    pub fn with_after(mut self, dt: NaiveDateTime) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end moment directly.
    #[must_use]
    pub fn with_before(mut self, dt: NaiveDateTime) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.from.is_some()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if a single message passes every active filter.
    pub fn matches(&self, msg: &Message) -> bool {
        if let Some(ref from) = self.from {
            if !msg.sender.eq_ignore_ascii_case(from) {
                return false;
            }
        }

        if self.has_date_filter() {
            let Some(ts) = msg.datetime() else {
                return false;
            };
            if self.after.is_some_and(|after| ts < after) {
                return false;
            }
            if self.before.is_some_and(|before| ts > before) {
                return false;
            }
        }

        true
    }
}

fn parse_filter_date(date_str: &str) -> Result<NaiveDate, ChatlensError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Filters messages, keeping only those that match all active filters.
///
/// If no filters are active, returns the original messages unchanged.
/// Order is preserved.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    messages.into_iter().filter(|msg| config.matches(msg)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_msg(sender: &str, body: &str, ts: &str) -> Message {
        Message::new(sender, body, ts)
    }

    #[test]
    fn test_filter_by_sender() {
        let messages = vec![
            make_msg("Alice", "Hello", "1/2/23, 10:30 AM"),
            make_msg("Bob", "Hi", "1/2/23, 10:31 AM"),
            make_msg("alice", "Bye", "1/2/23, 10:32 AM"),
        ];

        let config = FilterConfig::new().with_sender("Alice");
        let filtered = apply_filters(messages, &config);

        assert_eq!(filtered.len(), 2);
        assert!(
            filtered
                .iter()
                .all(|m| m.sender.eq_ignore_ascii_case("Alice"))
        );
    }

    #[test]
    fn test_filter_by_date_after() {
        let messages = vec![
            make_msg("Alice", "Old", "1/1/24, 12:00 PM"),
            make_msg("Alice", "New", "6/15/24, 12:00 PM"),
        ];

        let config = FilterConfig::new().with_date_from("2024-06-01").unwrap();
        let filtered = apply_filters(messages, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].body, "New");
    }

    #[test]
    fn test_filter_by_date_before_is_inclusive() {
        let messages = vec![
            make_msg("Alice", "Old", "3/1/2024, 23:30"),
            make_msg("Alice", "New", "3/2/2024, 00:00"),
        ];

        let config = FilterConfig::new().with_date_to("2024-03-01").unwrap();
        let filtered = apply_filters(messages, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].body, "Old");
    }

    #[test]
    fn test_unreadable_timestamp_excluded_when_date_filter() {
        let messages = vec![
            make_msg("Alice", "Readable", "6/15/24, 10:00 AM"),
            make_msg("Alice", "Unreadable", "15/6/24, 10:00 AM"),
        ];

        let config = FilterConfig::new().with_date_from("2024-01-01").unwrap();
        let filtered = apply_filters(messages, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].body, "Readable");
    }

    #[test]
    fn test_invalid_date_format() {
        let result = FilterConfig::new().with_date_from("01-01-2024");
        assert!(matches!(result, Err(ChatlensError::InvalidDate { .. })));
    }

    #[test]
    fn test_inactive_filter_passes_everything() {
        let messages = vec![make_msg("Alice", "x", "garbage")];
        let filtered = apply_filters(messages.clone(), &FilterConfig::new());
        assert_eq!(filtered, messages);
    }

    #[test]
    fn test_is_active() {
        assert!(!FilterConfig::new().is_active());
        assert!(FilterConfig::new().with_sender("Alice").is_active());
        assert!(
            FilterConfig::new()
                .with_date_to("2024-01-01")
                .unwrap()
                .is_active()
        );
    }
}
