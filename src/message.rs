//! The parsed message type.
//!
//! [`Message`] is what the transcript parser produces and what every analytics
//! reduction consumes. It is a plain value: once the parser appends it to its
//! output, nothing mutates it again.
//!
//! # Examples
//!
//! ```
//! use chatlens::Message;
//!
//! let msg = Message::new("Alice", "Hello, world!", "1/2/23, 10:30 AM");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.body(), "Hello, world!");
//! assert_eq!(msg.timestamp(), "1/2/23, 10:30 AM");
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatlens::Message;
//!
//! let msg = Message::new("Alice", "Hello!", "1/2/23, 10:30 AM");
//! let json = serde_json::to_string(&msg)?;
//! let parsed: Message = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::parsing::timestamp::interpret_timestamp;

/// One logical chat message reconstructed from a transcript.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `sender` | `String` | Display name before the colon of the header line, trimmed |
/// | `body` | `String` | Header remainder plus folded continuation lines, space-joined |
/// | `timestamp` | `String` | Verbatim `"<date>, <time>"` from the header line |
///
/// The timestamp is deliberately kept as text. Use [`datetime`](Self::datetime)
/// when a calendar value is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the message author.
    pub sender: String,

    /// Text content of the message.
    ///
    /// Continuation lines are folded in with a single space, so the body never
    /// contains newlines.
    pub body: String,

    /// The `"<date>, <time>"` pair exactly as it appeared in the header line.
    pub timestamp: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(
        sender: impl Into<String>,
        body: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the verbatim timestamp text.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Interprets the verbatim timestamp as a calendar value.
    ///
    /// Returns `None` when the text is not a valid month-first date/time.
    ///
    /// ```
    /// use chatlens::Message;
    ///
    /// let msg = Message::new("Alice", "Hi", "1/2/23, 10:30 PM");
    /// let dt = msg.datetime().unwrap();
    /// assert_eq!(dt.to_string(), "2023-01-02 22:30:00");
    /// ```
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        interpret_timestamp(&self.timestamp)
    }

    /// Returns `true` if this message's body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_new() {
        let msg = Message::new("Alice", "Hello", "1/2/23, 10:30 AM");
        assert_eq!(msg.sender(), "Alice");
        assert_eq!(msg.body(), "Hello");
        assert_eq!(msg.timestamp(), "1/2/23, 10:30 AM");
    }

    #[test]
    fn test_message_is_empty() {
        assert!(Message::new("Alice", "", "1/2/23, 10:30").is_empty());
        assert!(Message::new("Alice", "   ", "1/2/23, 10:30").is_empty());
        assert!(!Message::new("Alice", "Hello", "1/2/23, 10:30").is_empty());
    }

    #[test]
    fn test_message_datetime() {
        let msg = Message::new("Alice", "Hi", "12/31/2023, 23:59");
        let dt = msg.datetime().unwrap();
        assert_eq!(dt.to_string(), "2023-12-31 23:59:00");

        let bad = Message::new("Alice", "Hi", "13/40/23, 10:30 AM");
        assert!(bad.datetime().is_none());
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::new("Alice", "Hello", "1/2/23, 10:30 AM");
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(
            json,
            r#"{"sender":"Alice","body":"Hello","timestamp":"1/2/23, 10:30 AM"}"#
        );
    }

    #[test]
    fn test_message_deserialization() {
        let json = r#"{"sender":"Bob","body":"Hi","timestamp":"1/2/23, 9:00 PM"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.sender(), "Bob");
        assert_eq!(msg.body(), "Hi");
        assert_eq!(msg.timestamp(), "1/2/23, 9:00 PM");
    }
}
