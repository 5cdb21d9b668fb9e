//! Mention extraction and the mention graph.
//!
//! Two syntaxes are recognised:
//!
//! - Bidi-wrapped: `@\u{2068}Name With Spaces\u{2069}`. Exports wrap contact
//!   names in an isolate / pop-directional-isolate pair; anything between the
//!   markers is the name. Both the first-strong (`U+2068`) and left-to-right
//!   (`U+2066`) isolates are accepted as the opening marker.
//! - Plain: `@word`, where word is ASCII letters, digits and underscore.
//!   Non-ASCII names are only captured through the bidi form.
//!
//! Self-mentions are counted like any other mention.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::counts::{RankedCounts, Tally};
use crate::Message;

static BIDI_MENTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@[\x{2066}\x{2068}]([^\x{2069}]+)\x{2069}").expect("bidi mention pattern is valid")
});

static PLAIN_MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([A-Za-z0-9_]+)").expect("plain mention pattern is valid"));

/// Mentions received and given, each ranked by count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Mentions {
    /// How often each name was mentioned.
    pub mentions_received: RankedCounts,
    /// How many mentions each sender wrote.
    pub mentions_given: RankedCounts,
}

/// Extracts mentioned names from a message body.
///
/// Bidi-wrapped mentions come first, then plain ones. Names are trimmed and
/// empty names are skipped.
///
/// ```
/// use chatlens::analytics::extract_mentions;
///
/// let body = "hey @\u{2068}Ana María\u{2069} and @bob_2";
/// assert_eq!(extract_mentions(body), vec!["Ana María", "bob_2"]);
/// ```
pub fn extract_mentions(body: &str) -> Vec<&str> {
    let bidi = BIDI_MENTION_RE.captures_iter(body);
    let plain = PLAIN_MENTION_RE.captures_iter(body);

    bidi.chain(plain)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Builds the mention graph over all messages.
///
/// Every extracted mention adds one to `mentions_received[name]` and one to
/// `mentions_given[sender]`.
pub fn mention_counts(messages: &[Message]) -> Mentions {
    let mut received = Tally::new();
    let mut given = Tally::new();

    for msg in messages {
        for name in extract_mentions(&msg.body) {
            received.increment(name);
            given.increment(&msg.sender);
        }
    }

    Mentions {
        mentions_received: received.into_ranked(),
        mentions_given: given.into_ranked(),
    }
}
