use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::memory::{DatedItem, LetterItem, MediaItem};

/// Borrowed view of one item on the shared timeline
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type", content = "item", rename_all = "snake_case")]
pub enum TimelineEntry<'a> {
    Media(&'a MediaItem),
    Letter(&'a LetterItem),
}

impl DatedItem for TimelineEntry<'_> {
    fn id(&self) -> Uuid {
        match self {
            Self::Media(m) => m.id,
            Self::Letter(l) => l.id,
        }
    }

    fn date(&self) -> DateTime<Utc> {
        match self {
            Self::Media(m) => m.date,
            Self::Letter(l) => l.date,
        }
    }
}

impl TimelineEntry<'_> {
    pub fn title(&self) -> &str {
        match self {
            Self::Media(m) => &m.title,
            Self::Letter(l) => &l.title,
        }
    }

    pub fn is_letter(&self) -> bool {
        matches!(self, Self::Letter(_))
    }
}

/// Merge media and letters into one ascending sequence
///
/// Sources are only borrowed. Equal dates keep media ahead of letters and
/// keep each source's own order.
pub fn merge<'a>(media: &'a [MediaItem], letters: &'a [LetterItem]) -> Vec<TimelineEntry<'a>> {
    let mut entries: Vec<TimelineEntry<'a>> = Vec::with_capacity(media.len() + letters.len());
    entries.extend(media.iter().map(TimelineEntry::Media));
    entries.extend(letters.iter().map(TimelineEntry::Letter));

    // sort_by_key is stable
    entries.sort_by_key(|entry| entry.date());
    entries
}
