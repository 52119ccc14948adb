use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Response body of `GET <base>/api/<collection>?populate=*`
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEnvelope {
    #[serde(default)]
    pub data: Vec<ContentItem>,
}

/// Reference to an uploaded media file, relative to the content origin
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    #[serde(default)]
    pub url: Option<String>,
}

impl MediaRef {
    pub fn new(url: &str) -> Self {
        Self {
            url: Some(url.to_string()),
        }
    }

    /// The locator, if it is present and non-blank
    pub fn locator(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

/// A post as delivered by the content source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    /// Unparseable dates are kept as `None` instead of rejecting the payload
    #[serde(default, deserialize_with = "deserialize_posted_on")]
    pub posted_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image: Option<MediaRef>,
    #[serde(default, rename = "authorImage")]
    pub author_image: Option<MediaRef>,
    #[serde(default, rename = "readingTime")]
    pub reading_time: Option<u32>,
}

impl ContentItem {
    pub fn display_title(&self) -> &str {
        non_blank(&self.title).unwrap_or("Untitled Post")
    }

    pub fn display_category(&self) -> &str {
        non_blank(&self.category).unwrap_or("Uncategorized")
    }

    pub fn display_excerpt(&self) -> &str {
        non_blank(&self.excerpt).unwrap_or("No excerpt available")
    }

    pub fn display_author(&self) -> &str {
        non_blank(&self.author).unwrap_or("Anonymous")
    }

    /// "5 min read", or "- min read" when unknown
    pub fn reading_time_label(&self) -> String {
        match self.reading_time {
            Some(minutes) if minutes > 0 => format!("{} min read", minutes),
            _ => "- min read".to_string(),
        }
    }

    /// Check whether the item belongs to `category` (exact match)
    pub fn is_in_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (UTC midnight)
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn deserialize_posted_on<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => {
            let parsed = parse_timestamp(&s);
            if parsed.is_none() {
                tracing::warn!("Ignoring unparseable posted_on value: {:?}", s);
            }
            parsed
        }
        _ => None,
    })
}
