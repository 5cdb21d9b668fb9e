//! CSV output writer: one row of figures per user.

use csv::WriterBuilder;

use crate::analytics::{AnalyticsResult, UserSummary};
use crate::error::{ChatlensError, Result};

/// Column names of the per-user table.
pub const CSV_HEADER: [&str; 6] = [
    "User",
    "Messages",
    "Media",
    "MentionsGiven",
    "MentionsReceived",
    "SocialLinks",
];

/// Writes the per-user table to a CSV file.
///
/// Uses semicolon (`;`) as delimiter; rows follow the roster order.
pub fn write_csv(analytics: &AnalyticsResult, output_path: &str) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .from_path(output_path)?;
    write_rows(&mut writer, analytics)?;
    writer.flush()?;
    Ok(())
}

/// Converts the per-user table to a CSV string.
pub fn to_csv(analytics: &AnalyticsResult) -> Result<String> {
    let mut writer = WriterBuilder::new().delimiter(b';').from_writer(Vec::new());
    write_rows(&mut writer, analytics)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| ChatlensError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ChatlensError::utf8("CSV output", e))
}

fn write_rows<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    analytics: &AnalyticsResult,
) -> Result<()> {
    writer.write_record(CSV_HEADER)?;
    for row in analytics.user_summaries() {
        writer.write_record(record(&row))?;
    }
    Ok(())
}

fn record(row: &UserSummary) -> [String; 6] {
    [
        row.user.clone(),
        row.messages.to_string(),
        row.media.to_string(),
        row.mentions_given.to_string(),
        row.mentions_received.to_string(),
        row.social_links.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::analyze;
    use tempfile::NamedTempFile;

    fn sample() -> AnalyticsResult {
        analyze(&crate::parse(
            "1/2/23, 10:30 AM - Alice: Hello @Bob check instagram.com/alice\n\
             1/2/23, 10:31 AM - Bob: <Media omitted>",
        ))
    }

    #[test]
    fn test_to_csv() {
        let csv = to_csv(&sample()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines,
            vec![
                "User;Messages;Media;MentionsGiven;MentionsReceived;SocialLinks",
                "Alice;1;0;1;0;1",
                "Bob;1;1;0;1;0",
            ]
        );
    }

    #[test]
    fn test_to_csv_empty_has_header_only() {
        let csv = to_csv(&AnalyticsResult::default()).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_write_csv_quotes_delimiter_in_name() {
        let analytics = analyze(&crate::parse("1/2/23, 10:30 AM - A;B: hi"));

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();
        write_csv(&analytics, path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("\"A;B\";1;0;0;0;0"));
    }
}
