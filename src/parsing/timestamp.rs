//! Calendar interpretation of verbatim header timestamps.
//!
//! Parsed messages keep their timestamp as text. Filtering by date needs a
//! real value, so this module reads the text month-first:
//!
//! | Input | Result |
//! |-------|--------|
//! | `1/2/23, 10:30 AM` | 2023-01-02 10:30 |
//! | `1/2/23, 10:30\u{202F}pm` | 2023-01-02 22:30 |
//! | `12/31/2023, 23:59` | 2023-12-31 23:59 |

use chrono::NaiveDateTime;

const MERIDIEM_MARKERS: [&str; 4] = ["AM", "PM", "am", "pm"];

/// Interprets a `"<date>, <time>"` timestamp.
///
/// Returns `None` if the text does not describe a valid date and time.
pub fn interpret_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
    let (date, time) = timestamp.split_once(',')?;
    let date = date.trim();
    let time = time.trim();

    // A two digit year is a short year; anything longer is taken literally.
    let year = date.rsplit('/').next()?;
    let date_format = if year.len() == 2 { "%m/%d/%y" } else { "%m/%d/%Y" };

    match split_meridiem(time) {
        Some((clock, marker)) => {
            let normalized = format!("{date}, {clock} {}", marker.to_ascii_uppercase());
            NaiveDateTime::parse_from_str(&normalized, &format!("{date_format}, %I:%M %p")).ok()
        }
        None => {
            let normalized = format!("{date}, {time}");
            NaiveDateTime::parse_from_str(&normalized, &format!("{date_format}, %H:%M")).ok()
        }
    }
}

/// Splits `10:30 AM`, `10:30\u{202F}AM` or `10:30AM` into clock and marker.
fn split_meridiem(time: &str) -> Option<(&str, &str)> {
    MERIDIEM_MARKERS.iter().find_map(|marker| {
        time.strip_suffix(marker)
            .map(|clock| (clock.trim_end_matches(char::is_whitespace), *marker))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_twelve_hour() {
        assert_eq!(
            interpret_timestamp("1/2/23, 10:30 AM"),
            Some(dt(2023, 1, 2, 10, 30))
        );
        assert_eq!(
            interpret_timestamp("1/2/23, 10:30 PM"),
            Some(dt(2023, 1, 2, 22, 30))
        );
        assert_eq!(
            interpret_timestamp("1/2/23, 12:05 AM"),
            Some(dt(2023, 1, 2, 0, 5))
        );
    }

    #[test]
    fn test_marker_variants() {
        assert_eq!(
            interpret_timestamp("1/2/23, 10:30\u{202F}pm"),
            Some(dt(2023, 1, 2, 22, 30))
        );
        assert_eq!(
            interpret_timestamp("1/2/23, 9:15am"),
            Some(dt(2023, 1, 2, 9, 15))
        );
    }

    #[test]
    fn test_twenty_four_hour_and_long_year() {
        assert_eq!(
            interpret_timestamp("12/31/2023, 23:59"),
            Some(dt(2023, 12, 31, 23, 59))
        );
    }

    #[test]
    fn test_invalid() {
        assert!(interpret_timestamp("").is_none());
        assert!(interpret_timestamp("1/2/23").is_none());
        assert!(interpret_timestamp("13/2/23, 10:30 AM").is_none());
        assert!(interpret_timestamp("2/30/23, 10:30").is_none());
        assert!(interpret_timestamp("1/2/23, 25:00").is_none());
    }
}
