//! Social-media link detection.
//!
//! Each [`SocialPlatform`] has a case-insensitive pattern for profile URLs or
//! handles. A message counts once per platform it matches, however many links
//! to that platform it contains.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::Message;

/// Supported social platforms, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    /// `instagram.com/<user>` or `@<user>.instagram`
    Instagram,
    /// `twitter.com/<user>` or `x.com/<user>`
    Twitter,
    /// `facebook.com/<user>`
    Facebook,
    /// `tiktok.com/@<user>`
    TikTok,
    /// `youtube.com/@<channel>` or `youtu.be/<id>`
    YouTube,
    /// `t.me/<user>`
    Telegram,
    /// `linkedin.com/in/<user>`
    LinkedIn,
    /// `github.com/<user>`
    GitHub,
}

impl SocialPlatform {
    /// Returns all platforms in reporting order.
    pub fn all() -> &'static [SocialPlatform] {
        &[
            SocialPlatform::Instagram,
            SocialPlatform::Twitter,
            SocialPlatform::Facebook,
            SocialPlatform::TikTok,
            SocialPlatform::YouTube,
            SocialPlatform::Telegram,
            SocialPlatform::LinkedIn,
            SocialPlatform::GitHub,
        ]
    }

    /// Returns the lowercase key used in serialized output.
    pub fn key(&self) -> &'static str {
        match self {
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::TikTok => "tiktok",
            SocialPlatform::YouTube => "youtube",
            SocialPlatform::Telegram => "telegram",
            SocialPlatform::LinkedIn => "linkedin",
            SocialPlatform::GitHub => "github",
        }
    }

    /// Returns the link pattern for this platform (matched case-insensitively).
    pub fn pattern(&self) -> &'static str {
        match self {
            SocialPlatform::Instagram => r"instagram\.com/\w+|@\w+\.instagram",
            SocialPlatform::Twitter => r"twitter\.com/\w+|x\.com/\w+",
            SocialPlatform::Facebook => r"facebook\.com/\w+",
            SocialPlatform::TikTok => r"tiktok\.com/@\w+",
            SocialPlatform::YouTube => r"youtube\.com/@\w+|youtu\.be/\w+",
            SocialPlatform::Telegram => r"t\.me/\w+",
            SocialPlatform::LinkedIn => r"linkedin\.com/in/\w+",
            SocialPlatform::GitHub => r"github\.com/\w+",
        }
    }
}

impl std::fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SocialPlatform::Instagram => write!(f, "Instagram"),
            SocialPlatform::Twitter => write!(f, "Twitter/X"),
            SocialPlatform::Facebook => write!(f, "Facebook"),
            SocialPlatform::TikTok => write!(f, "TikTok"),
            SocialPlatform::YouTube => write!(f, "YouTube"),
            SocialPlatform::Telegram => write!(f, "Telegram"),
            SocialPlatform::LinkedIn => write!(f, "LinkedIn"),
            SocialPlatform::GitHub => write!(f, "GitHub"),
        }
    }
}

impl std::str::FromStr for SocialPlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "instagram" | "ig" => Ok(SocialPlatform::Instagram),
            "twitter" | "x" => Ok(SocialPlatform::Twitter),
            "facebook" | "fb" => Ok(SocialPlatform::Facebook),
            "tiktok" => Ok(SocialPlatform::TikTok),
            "youtube" | "yt" => Ok(SocialPlatform::YouTube),
            "telegram" | "tg" => Ok(SocialPlatform::Telegram),
            "linkedin" => Ok(SocialPlatform::LinkedIn),
            "github" | "gh" => Ok(SocialPlatform::GitHub),
            _ => Err(format!("Unknown social platform: '{}'", s)),
        }
    }
}

static PLATFORM_RES: LazyLock<Vec<(SocialPlatform, Regex)>> = LazyLock::new(|| {
    SocialPlatform::all()
        .iter()
        .map(|&platform| {
            let re = Regex::new(&format!("(?i){}", platform.pattern()))
                .expect("social platform pattern is valid");
            (platform, re)
        })
        .collect()
});

/// Per-sender link counts: sender → (platform → messages with a link).
pub type SocialLinks = BTreeMap<String, BTreeMap<SocialPlatform, usize>>;

/// Returns the platforms `body` links to, in reporting order.
///
/// ```
/// use chatlens::analytics::{SocialPlatform, detect_platforms};
///
/// let found = detect_platforms("see github.com/alice and x.com/alice");
/// assert_eq!(found, vec![SocialPlatform::Twitter, SocialPlatform::GitHub]);
/// ```
pub fn detect_platforms(body: &str) -> Vec<SocialPlatform> {
    PLATFORM_RES
        .iter()
        .filter(|(_, re)| re.is_match(body))
        .map(|&(platform, _)| platform)
        .collect()
}

/// Counts social links per sender.
///
/// Senders without any link are left out, and so are platforms a sender
/// never linked. Senders are ordered by name.
pub fn social_links(messages: &[Message]) -> SocialLinks {
    let mut links = SocialLinks::new();

    for msg in messages {
        for platform in detect_platforms(&msg.body) {
            *links
                .entry(msg.sender.clone())
                .or_default()
                .entry(platform)
                .or_insert(0) += 1;
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(sender: &str, body: &str) -> Message {
        Message::new(sender, body, "1/2/23, 10:30 AM")
    }

    #[test]
    fn test_each_platform_detected() {
        let cases = [
            ("https://instagram.com/alice", SocialPlatform::Instagram),
            ("follow @alice.instagram", SocialPlatform::Instagram),
            ("twitter.com/alice", SocialPlatform::Twitter),
            ("https://x.com/alice", SocialPlatform::Twitter),
            ("facebook.com/alice", SocialPlatform::Facebook),
            ("tiktok.com/@alice", SocialPlatform::TikTok),
            ("youtube.com/@alice", SocialPlatform::YouTube),
            ("youtu.be/dQw4w9WgXcQ", SocialPlatform::YouTube),
            ("t.me/alice", SocialPlatform::Telegram),
            ("linkedin.com/in/alice", SocialPlatform::LinkedIn),
            ("github.com/alice", SocialPlatform::GitHub),
        ];

        for (body, expected) in cases {
            assert!(
                detect_platforms(body).contains(&expected),
                "{body} should match {expected}"
            );
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            detect_platforms("INSTAGRAM.COM/Alice"),
            vec![SocialPlatform::Instagram]
        );
    }

    #[test]
    fn test_no_match_without_path() {
        assert!(detect_platforms("I love instagram.com").is_empty());
        assert!(detect_platforms("tiktok.com/alice").is_empty());
        assert!(detect_platforms("plain text").is_empty());
    }

    #[test]
    fn test_one_increment_per_message_per_platform() {
        let messages = vec![
            msg("Alice", "instagram.com/a instagram.com/b"),
            msg("Alice", "instagram.com/c and github.com/alice"),
            msg("Bob", "nothing"),
        ];
        let links = social_links(&messages);

        assert_eq!(links.len(), 1);
        let alice = &links["Alice"];
        assert_eq!(alice[&SocialPlatform::Instagram], 2);
        assert_eq!(alice[&SocialPlatform::GitHub], 1);
        assert!(!alice.contains_key(&SocialPlatform::Twitter));
    }

    #[test]
    fn test_senders_sorted_by_name() {
        let messages = vec![msg("Zoe", "t.me/zoe"), msg("Adam", "t.me/adam")];
        let links = social_links(&messages);
        let names: Vec<_> = links.keys().cloned().collect();
        assert_eq!(names, vec!["Adam", "Zoe"]);
    }

    #[test]
    fn test_serialized_keys() {
        let links = social_links(&[msg("Alice", "youtu.be/xyz linkedin.com/in/alice")]);
        let json = serde_json::to_string(&links).unwrap();
        assert_eq!(json, r#"{"Alice":{"youtube":1,"linkedin":1}}"#);
    }

    #[test]
    fn test_platform_from_str_and_display() {
        assert_eq!("x".parse::<SocialPlatform>().unwrap(), SocialPlatform::Twitter);
        assert_eq!("GitHub".parse::<SocialPlatform>().unwrap(), SocialPlatform::GitHub);
        assert!("myspace".parse::<SocialPlatform>().is_err());
        assert_eq!(SocialPlatform::Twitter.to_string(), "Twitter/X");
        assert_eq!(SocialPlatform::TikTok.key(), "tiktok");
    }
}
