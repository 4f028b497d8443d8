use std::path::Path;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// Anything that can be placed on the timeline
pub trait DatedItem {
    fn id(&self) -> Uuid;
    fn date(&self) -> DateTime<Utc>;
}

/// Kind of a stored media file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "heic", "heif", "tif", "tiff", "svg",
];

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "m4v", "webm", "mkv", "avi"];

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    /// Infer the kind from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .ok_or_else(|| Error::UnsupportedMedia(path.display().to_string()))?;

        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Ok(Self::Image)
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Ok(Self::Video)
        } else {
            Err(Error::UnsupportedMedia(path.display().to_string()))
        }
    }
}

impl std::str::FromStr for MediaKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            other => Err(Error::UnsupportedMedia(other.to_string())),
        }
    }
}

/// A label attached to media
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
}

/// A photo or video kept in the gallery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// When the moment happened, not when it was added
    pub date: DateTime<Utc>,
    pub file_path: String,
    pub kind: MediaKind,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Data required to add media
#[derive(Debug, Clone)]
pub struct NewMedia {
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub file_path: String,
    pub kind: MediaKind,
    pub tags: Vec<String>,
}

/// A love letter from the journal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterItem {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Data required to write a letter
#[derive(Debug, Clone)]
pub struct NewLetter {
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
}

impl DatedItem for MediaItem {
    fn id(&self) -> Uuid {
        self.id
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl DatedItem for LetterItem {
    fn id(&self) -> Uuid {
        self.id
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl LetterItem {
    /// True when the letter falls on `day` as seen in `tz`
    pub fn is_dated_on<Tz: TimeZone>(&self, day: NaiveDate, tz: &Tz) -> bool {
        self.date.with_timezone(tz).date_naive() == day
    }
}

impl NewMedia {
    /// Trim tag names, drop blanks and duplicates, keeping first occurrence order
    pub fn normalized_tags(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in &self.tags {
            let tag = tag.trim();
            if !tag.is_empty() && !seen.iter().any(|s| s == tag) {
                seen.push(tag.to_string());
            }
        }
        seen
    }
}

/// Parse a user-entered date: `YYYY-MM-DD` (midnight UTC) or RFC 3339
pub fn parse_date(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(day) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(midnight) = day.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::InvalidDate(input.to_string()))
}
