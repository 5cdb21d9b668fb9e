//! System notice classification.
//!
//! System notices share the header syntax with real messages
//! (`1/2/23, 10:32 AM - Alice: Alice added Carol`), so they can only be told
//! apart by their body. A body is a notice when it contains any marker from
//! [`SYSTEM_NOTICE_MARKERS`] as a case-insensitive substring.
//!
//! The markers are intentionally broad ("added", "left", "changed"): a user
//! message that happens to contain one of these words is dropped as well.

use serde::{Deserialize, Serialize};

/// Category of a system notice marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Someone joined, left, was added/removed, or created the group.
    Membership,
    /// End-to-end encryption banner.
    Encryption,
    /// "This message was deleted" / "This message was edited".
    Tombstone,
    /// Admin promotions, demotions and admin-only settings.
    Admin,
    /// Group name, icon or settings changes.
    GroupMetadata,
    /// Pinned message notice.
    Pinned,
}

/// Ordered marker table. The first matching entry decides the [`NoticeKind`].
///
/// Markers are stored lowercase.
pub const SYSTEM_NOTICE_MARKERS: &[(NoticeKind, &str)] = &[
    (NoticeKind::Encryption, "messages and calls are encrypted"),
    (NoticeKind::Encryption, "end-to-end encrypted"),
    (NoticeKind::Tombstone, "this message was deleted"),
    (NoticeKind::Tombstone, "this message was edited"),
    (NoticeKind::Admin, "is now admin"),
    (NoticeKind::Admin, "is no longer admin"),
    (NoticeKind::Admin, "you are no longer admin"),
    (NoticeKind::Admin, "restricted changes to admin"),
    (NoticeKind::Admin, "turned on admin approval"),
    (NoticeKind::Pinned, "pinned a message"),
    (NoticeKind::GroupMetadata, "group name from"),
    (NoticeKind::GroupMetadata, "changed this group's icon"),
    (NoticeKind::GroupMetadata, "changed this group"),
    (NoticeKind::GroupMetadata, "changed"),
    (NoticeKind::Membership, "you were added"),
    (NoticeKind::Membership, "you were removed"),
    (NoticeKind::Membership, "added"),
    (NoticeKind::Membership, "removed"),
    (NoticeKind::Membership, "left"),
    (NoticeKind::Membership, "created"),
];

/// Returns the kind of system notice `body` is, if any.
///
/// ```
/// use chatlens::parsing::{NoticeKind, classify_notice};
///
/// assert_eq!(classify_notice("Alice added Carol"), Some(NoticeKind::Membership));
/// assert_eq!(classify_notice("This message was deleted"), Some(NoticeKind::Tombstone));
/// assert_eq!(classify_notice("see you at 5"), None);
/// ```
pub fn classify_notice(body: &str) -> Option<NoticeKind> {
    let lower = body.to_lowercase();
    SYSTEM_NOTICE_MARKERS
        .iter()
        .find(|(_, marker)| lower.contains(marker))
        .map(|&(kind, _)| kind)
}

/// Returns `true` if `body` contains any built-in system notice marker.
pub fn is_system_notice(body: &str) -> bool {
    classify_notice(body).is_some()
}

/// System notice filter with optional caller-supplied markers.
///
/// The default filter uses exactly [`SYSTEM_NOTICE_MARKERS`].
#[derive(Debug, Clone, Default)]
pub struct NoticeFilter {
    extra_markers: Vec<String>,
}

impl NoticeFilter {
    /// Creates a filter with the built-in marker table only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filter that also matches the given markers (case-insensitive).
    pub fn with_extra_markers<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra_markers: markers
                .into_iter()
                .map(|m| m.as_ref().to_lowercase())
                .filter(|m| !m.is_empty())
                .collect(),
        }
    }

    /// Returns `true` if `body` should be dropped as a system notice.
    pub fn matches(&self, body: &str) -> bool {
        let lower = body.to_lowercase();
        SYSTEM_NOTICE_MARKERS
            .iter()
            .any(|(_, marker)| lower.contains(marker))
            || self.extra_markers.iter().any(|m| lower.contains(m.as_str()))
    }
}
