//! Media-sharing counts.

use super::counts::{RankedCounts, Tally};
use crate::Message;

/// Lowercase markers that identify a media message.
///
/// The bracketed placeholders are what exports write when media is left out;
/// the extensions catch attached file names.
pub const MEDIA_MARKERS: &[&str] = &[
    "<image omitted>",
    "<media omitted>",
    "<video omitted>",
    "<audio omitted>",
    ".jpg",
    ".png",
    ".mp4",
    ".mp3",
];

/// Returns `true` if `body` contains any media marker (case-insensitive).
pub fn is_media(body: &str) -> bool {
    let lower = body.to_lowercase();
    MEDIA_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Counts media messages per sender. A message counts once no matter how many
/// markers it contains.
pub fn media_counts(messages: &[Message]) -> RankedCounts {
    let mut tally = Tally::new();
    for msg in messages.iter().filter(|m| is_media(&m.body)) {
        tally.increment(&msg.sender);
    }
    tally.into_ranked()
}
