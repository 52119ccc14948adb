use chrono::{DateTime, Datelike, Utc};

use super::models::ContentItem;

/// Rendered in place of a missing or unparseable date
pub const DATE_PLACEHOLDER: &str = "—";

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English ordinal suffix for a day of the month
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (1, n) if n != 11 => "st",
        (2, n) if n != 12 => "nd",
        (3, n) if n != 13 => "rd",
        _ => "th",
    }
}

/// Format as "5th January 2024" (UTC calendar date)
pub fn format_ordinal_date(timestamp: Option<DateTime<Utc>>) -> String {
    let Some(ts) = timestamp else {
        return DATE_PLACEHOLDER.to_string();
    };

    let day = ts.day();
    format!(
        "{}{} {} {}",
        day,
        ordinal_suffix(day),
        MONTHS[ts.month0() as usize],
        ts.year()
    )
}

/// Format as "2024-01-05"
pub fn format_short_date(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp
        .map(|ts| ts.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| DATE_PLACEHOLDER.to_string())
}

/// Card footer line: "5th January 2024 - 4 min read"
pub fn byline(item: &ContentItem) -> String {
    format!(
        "{} - {}",
        format_ordinal_date(item.posted_on),
        item.reading_time_label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::models::parse_timestamp;

    fn day(d: u32) -> Option<DateTime<Utc>> {
        parse_timestamp(&format!("2024-01-{:02}", d))
    }

    #[test]
    fn test_ordinal_suffixes() {
        let expected = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (23, "23rd"),
            (30, "30th"),
            (31, "31st"),
        ];
        for (d, text) in expected {
            assert_eq!(format!("{}{}", d, ordinal_suffix(d)), text);
        }
    }

    #[test]
    fn test_format_ordinal_date() {
        assert_eq!(format_ordinal_date(day(1)), "1st January 2024");
        assert_eq!(format_ordinal_date(day(12)), "12th January 2024");
        assert_eq!(
            format_ordinal_date(parse_timestamp("2023-12-23T18:00:00Z")),
            "23rd December 2023"
        );
    }

    #[test]
    fn test_missing_date_uses_placeholder() {
        assert_eq!(format_ordinal_date(None), DATE_PLACEHOLDER);
        assert_eq!(format_short_date(None), DATE_PLACEHOLDER);
    }

    #[test]
    fn test_short_date_and_byline() {
        assert_eq!(format_short_date(day(5)), "2024-01-05");

        let item: ContentItem = serde_json::from_str(
            r#"{ "id": 1, "posted_on": "2024-03-02", "readingTime": 4 }"#,
        )
        .unwrap();
        assert_eq!(byline(&item), "2nd March 2024 - 4 min read");
    }
}
