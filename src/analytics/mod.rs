//! Aggregate analytics over parsed messages.
//!
//! Every view is a pure reduction over a `&[Message]`; none of them know
//! anything about raw transcript text.
//!
//! - [`counts`] - messages per sender, distinct roster
//! - [`mentions`] - mention graph (received / given)
//! - [`media`] - media messages per sender
//! - [`social`] - social-link counts per sender and platform
//!
//! [`analyze`] runs all of them and bundles the results.
//!
//! # Example
//!
//! ```rust
//! use chatlens::analytics::analyze;
//!
//! let messages = chatlens::parse(
//!     "1/2/23, 10:30 AM - Alice: Hello @Bob check instagram.com/alice\n\
//!      1/2/23, 10:31 AM - Bob: <Media omitted>",
//! );
//! let result = analyze(&messages);
//!
//! assert_eq!(result.total_messages, 2);
//! assert_eq!(result.users, vec!["Alice", "Bob"]);
//! assert_eq!(result.media_stats.get("Bob"), Some(1));
//! ```

pub mod counts;
pub mod media;
pub mod mentions;
pub mod social;

pub use counts::{RankedCounts, Tally, roster, sender_counts};
pub use media::{MEDIA_MARKERS, is_media, media_counts};
pub use mentions::{Mentions, extract_mentions, mention_counts};
pub use social::{SocialLinks, SocialPlatform, detect_platforms, social_links};

use serde::Serialize;
use tracing::debug;

use crate::Message;

/// The complete analytics bundle for one transcript.
///
/// Serializes to:
///
/// ```json
/// {
///   "total_messages": 2,
///   "total_users": 2,
///   "messages_per_user": {"Alice": 1, "Bob": 1},
///   "mentions": {"mentions_received": {"Bob": 1}, "mentions_given": {"Alice": 1}},
///   "media_stats": {"Bob": 1},
///   "social_media_links": {"Alice": {"instagram": 1}},
///   "users": ["Alice", "Bob"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalyticsResult {
    /// Number of parsed messages.
    pub total_messages: usize,
    /// Number of distinct senders.
    pub total_users: usize,
    /// Messages per sender, most active first.
    pub messages_per_user: RankedCounts,
    /// Mention graph.
    pub mentions: Mentions,
    /// Media messages per sender, most first.
    pub media_stats: RankedCounts,
    /// Social links per sender (by name) and platform.
    pub social_media_links: SocialLinks,
    /// Distinct senders, sorted ascending.
    pub users: Vec<String>,
}

/// One row of per-user figures, used by tabular outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    /// Sender name.
    pub user: String,
    /// Messages sent.
    pub messages: usize,
    /// Media messages sent.
    pub media: usize,
    /// Mentions written.
    pub mentions_given: usize,
    /// Times mentioned by name.
    pub mentions_received: usize,
    /// Messages containing a social link (all platforms).
    pub social_links: usize,
}

impl AnalyticsResult {
    /// Returns one summary row per user, in roster order.
    pub fn user_summaries(&self) -> Vec<UserSummary> {
        self.users
            .iter()
            .map(|user| UserSummary {
                user: user.clone(),
                messages: self.messages_per_user.get(user).unwrap_or(0),
                media: self.media_stats.get(user).unwrap_or(0),
                mentions_given: self.mentions.mentions_given.get(user).unwrap_or(0),
                mentions_received: self.mentions.mentions_received.get(user).unwrap_or(0),
                social_links: self
                    .social_media_links
                    .get(user)
                    .map_or(0, |links| links.values().sum()),
            })
            .collect()
    }
}

/// Computes every analytics view over `messages`.
///
/// Pure: calling it twice on the same input yields equal results.
pub fn analyze(messages: &[Message]) -> AnalyticsResult {
    let users = roster(messages);

    let result = AnalyticsResult {
        total_messages: messages.len(),
        total_users: users.len(),
        messages_per_user: sender_counts(messages),
        mentions: mention_counts(messages),
        media_stats: media_counts(messages),
        social_media_links: social_links(messages),
        users,
    };

    debug!(
        total_messages = result.total_messages,
        total_users = result.total_users,
        media_senders = result.media_stats.len(),
        mentioned = result.mentions.mentions_received.len(),
        link_senders = result.social_media_links.len(),
        "analyzed messages"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Message> {
        vec![
            Message::new(
                "Alice",
                "Hello @Bob check instagram.com/alice",
                "1/2/23, 10:30 AM",
            ),
            Message::new("Bob", "<Media omitted>", "1/2/23, 10:31 AM"),
        ]
    }

    #[test]
    fn test_analyze_sample() {
        let result = analyze(&sample());

        assert_eq!(result.total_messages, 2);
        assert_eq!(result.total_users, 2);
        assert_eq!(result.users, vec!["Alice", "Bob"]);
        assert_eq!(result.messages_per_user.get("Alice"), Some(1));
        assert_eq!(result.messages_per_user.get("Bob"), Some(1));
        assert_eq!(result.mentions.mentions_received.get("Bob"), Some(1));
        assert_eq!(result.mentions.mentions_given.get("Alice"), Some(1));
        assert_eq!(result.media_stats.get("Bob"), Some(1));
        assert_eq!(
            result.social_media_links["Alice"][&SocialPlatform::Instagram],
            1
        );
    }

    #[test]
    fn test_analyze_empty() {
        let result = analyze(&[]);
        assert_eq!(result, AnalyticsResult::default());
    }

    #[test]
    fn test_analyze_idempotent() {
        let messages = sample();
        assert_eq!(analyze(&messages), analyze(&messages));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(analyze(&sample())).unwrap();
        let expected = serde_json::json!({
            "total_messages": 2,
            "total_users": 2,
            "messages_per_user": {"Alice": 1, "Bob": 1},
            "mentions": {
                "mentions_received": {"Bob": 1},
                "mentions_given": {"Alice": 1}
            },
            "media_stats": {"Bob": 1},
            "social_media_links": {"Alice": {"instagram": 1}},
            "users": ["Alice", "Bob"]
        });
        assert_eq!(json, expected);
    }

    #[test]
    fn test_user_summaries() {
        let rows = analyze(&sample()).user_summaries();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            UserSummary {
                user: "Alice".into(),
                messages: 1,
                media: 0,
                mentions_given: 1,
                mentions_received: 0,
                social_links: 1,
            }
        );
        assert_eq!(rows[1].media, 1);
        assert_eq!(rows[1].mentions_received, 1);
    }
}
