//! Content item model

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;
use serde::Serialize;

/// Fields every metadata shape carries
pub trait Meta {
    /// Display title
    fn title(&self) -> &str;

    /// Publication date as written in the front-matter
    fn date(&self) -> &str;
}

/// A parsed content file: slug, typed metadata and the raw body
#[derive(Debug, Clone, Serialize)]
pub struct ContentItem<M> {
    /// File stem, unique within a language
    pub slug: String,

    /// Language partition the file was read from
    pub lang: String,

    /// Typed metadata projected from the front-matter
    pub meta: M,

    /// Parsed `meta.date`, used for ordering
    pub date: NaiveDateTime,

    /// Raw body (MDX/Markdown), never rendered here
    pub content: String,
}

/// Parse a front-matter date in the formats content authors use
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 with offset; compare in UTC
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc())
}

/// Ordering for listings: newest first, then slug ascending so equal dates
/// come out the same on every platform
pub fn newest_first<M>(a: &ContentItem<M>, b: &ContentItem<M>) -> Ordering {
    b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug))
}
