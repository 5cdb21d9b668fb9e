//! Plain-text summary report.
//!
//! Mirrors the tabs of the upload page: overview totals, then one ranking
//! table per view, each capped at [`ReportConfig::top`] rows.

use std::fmt::Write as _;
use std::fs;

use crate::analytics::{AnalyticsResult, RankedCounts};
use crate::config::ReportConfig;
use crate::error::Result;

/// Renders a human-readable report.
///
/// ```
/// use chatlens::analytics::analyze;
/// use chatlens::config::ReportConfig;
/// use chatlens::core::output::to_summary;
///
/// let analytics = analyze(&chatlens::parse("1/2/23, 10:30 AM - Alice: hi"));
/// let report = to_summary(&analytics, &ReportConfig::default());
/// assert!(report.contains("Messages: 1"));
/// ```
pub fn to_summary(analytics: &AnalyticsResult, config: &ReportConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Chat summary");
    let _ = writeln!(out, "  Messages: {}", analytics.total_messages);
    let _ = writeln!(out, "  Users: {}", analytics.total_users);

    ranking(&mut out, "Top senders", &analytics.messages_per_user, config.top);
    ranking(&mut out, "Media shared", &analytics.media_stats, config.top);
    ranking(
        &mut out,
        "Most mentioned",
        &analytics.mentions.mentions_received,
        config.top,
    );
    ranking(
        &mut out,
        "Most mentions given",
        &analytics.mentions.mentions_given,
        config.top,
    );

    let _ = writeln!(out, "\nSocial links");
    if analytics.social_media_links.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for (user, platforms) in analytics.social_media_links.iter().take(config.top) {
        let links = platforms
            .iter()
            .map(|(platform, count)| format!("{platform} {count}"))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "  {user}: {links}");
    }

    out
}

/// Writes the text report to a file.
pub fn write_summary(
    analytics: &AnalyticsResult,
    output_path: &str,
    config: &ReportConfig,
) -> Result<()> {
    fs::write(output_path, to_summary(analytics, config))?;
    Ok(())
}

fn ranking(out: &mut String, title: &str, counts: &RankedCounts, top: usize) {
    let _ = writeln!(out, "\n{title}");
    if counts.is_empty() {
        let _ = writeln!(out, "  (none)");
        return;
    }

    let width = counts
        .top(top)
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);
    for (rank, (name, count)) in counts.top(top).iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {name:<width$}  {count}", rank + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::analyze;

    fn sample() -> AnalyticsResult {
        analyze(&crate::parse(
            "1/2/23, 10:30 AM - Alice: Hello @Bob check instagram.com/alice\n\
             1/2/23, 10:31 AM - Bob: <Media omitted>\n\
             1/2/23, 10:32 AM - Alice: and youtu.be/abc",
        ))
    }

    #[test]
    fn test_summary_totals_and_tables() {
        let report = to_summary(&sample(), &ReportConfig::default());

        assert!(report.contains("Messages: 3"));
        assert!(report.contains("Users: 2"));
        assert!(report.contains(" 1. Alice  2"));
        assert!(report.contains(" 2. Bob    1"));
        assert!(report.contains("Most mentioned\n   1. Bob  1"));
        assert!(report.contains("Alice: Instagram 1, YouTube 1"));
    }

    #[test]
    fn test_summary_respects_top() {
        let report = to_summary(&sample(), &ReportConfig::new().with_top(1));
        assert!(report.contains(" 1. Alice"));
        assert!(!report.contains(" 2. Bob"));
    }

    #[test]
    fn test_summary_empty() {
        let report = to_summary(&AnalyticsResult::default(), &ReportConfig::default());
        assert!(report.contains("Messages: 0"));
        assert!(report.contains("(none)"));
    }
}
