//! Header line recognition.
//!
//! A header line starts a new message:
//!
//! ```text
//! 1/2/23, 10:30 AM - Alice: Hello there
//! 12/31/2023, 23:59 - Bob Smith (work): Happy new year
//! ```
//!
//! The date is `D/D/DD` to `DD/DD/DDDD`, the time is `H:MM` with an optional
//! `AM`/`PM` marker (upper or lower case) preceded by any whitespace, the
//! narrow no-break space `U+202F`, or nothing at all.

use std::sync::LazyLock;

use regex::Regex;

/// Header line pattern.
///
/// Groups: 1 = date, 2 = time, 3 = sender, 4 = initial body.
pub const HEADER_PATTERN: &str = r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s*(\d{1,2}:\d{2}(?:[\s\x{202F}]*(?:AM|PM|am|pm))?)\s*-\s*([^:\s][^:]*?)\s*:\s*(.*)$";

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEADER_PATTERN).expect("header pattern is valid"));

/// The pieces of a matched header line, borrowed from the source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLine<'a> {
    /// Date component, e.g. `1/2/23`.
    pub date: &'a str,
    /// Time component including any AM/PM marker, e.g. `10:30\u{202F}AM`.
    pub time: &'a str,
    /// Sender display name, trimmed.
    pub sender: &'a str,
    /// Remainder of the line after `Sender:`, trimmed. May be empty.
    pub body: &'a str,
}

impl HeaderLine<'_> {
    /// Returns the verbatim `"<date>, <time>"` pair.
    pub fn timestamp(&self) -> String {
        format!("{}, {}", self.date, self.time)
    }
}

/// Matches a single line against the header pattern.
///
/// Returns `None` for continuation lines, blank lines, and anything else that
/// does not start with a timestamp and a `Sender:` prefix.
///
/// # Example
///
/// ```
/// use chatlens::parsing::match_header;
///
/// let header = match_header("1/2/23, 10:30 AM - Alice: Hello").unwrap();
/// assert_eq!(header.sender, "Alice");
/// assert_eq!(header.body, "Hello");
/// assert_eq!(header.timestamp(), "1/2/23, 10:30 AM");
///
/// assert!(match_header("just a wrapped line").is_none());
/// ```
pub fn match_header(line: &str) -> Option<HeaderLine<'_>> {
    let caps = HEADER_RE.captures(line)?;

    Some(HeaderLine {
        date: caps.get(1).map_or("", |m| m.as_str()),
        time: caps.get(2).map_or("", |m| m.as_str()),
        sender: caps.get(3).map_or("", |m| m.as_str().trim()),
        body: caps.get(4).map_or("", |m| m.as_str().trim()),
    })
}
