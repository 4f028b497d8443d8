use chrono::{NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use super::models::{LetterItem, MediaItem};
use crate::Error;

/// Gallery ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Most recent moment first
    #[default]
    DateDesc,
    DateAsc,
    /// Most recently added first
    CreatedDesc,
    CreatedAsc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        Self::DateDesc,
        Self::DateAsc,
        Self::CreatedDesc,
        Self::CreatedAsc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DateDesc => "date-desc",
            Self::DateAsc => "date-asc",
            Self::CreatedDesc => "created-desc",
            Self::CreatedAsc => "created-asc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::DateDesc => "Date (newest first)",
            Self::DateAsc => "Date (oldest first)",
            Self::CreatedDesc => "Added (newest first)",
            Self::CreatedAsc => "Added (oldest first)",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| Error::Other(format!("unknown sort order: {}", s)))
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search and ordering applied to the gallery
#[derive(Debug, Clone, Default)]
pub struct MediaQuery {
    pub search: Option<String>,
    pub sort: SortOrder,
}

impl MediaQuery {
    pub fn new(search: Option<String>, sort: SortOrder) -> Self {
        Self { search, sort }
    }

    /// Check a single item against the search text
    ///
    /// Matches when a tag name, the title or the description contains the
    /// trimmed query, ignoring case. A blank query matches everything.
    pub fn matches(&self, media: &MediaItem) -> bool {
        let query = match self.search.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => q.to_lowercase(),
            _ => return true,
        };

        media.tags.iter().any(|t| t.name.to_lowercase().contains(&query))
            || media.title.to_lowercase().contains(&query)
            || media
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
    }

    /// Filter then sort, borrowing from the source slice
    pub fn arrange<'a>(&self, media: &'a [MediaItem]) -> Vec<&'a MediaItem> {
        let mut selected: Vec<&MediaItem> = media.iter().filter(|m| self.matches(m)).collect();

        match self.sort {
            SortOrder::DateDesc => selected.sort_by(|a, b| b.date.cmp(&a.date)),
            SortOrder::DateAsc => selected.sort_by(|a, b| a.date.cmp(&b.date)),
            SortOrder::CreatedDesc => selected.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::CreatedAsc => selected.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        }

        tracing::debug!(
            total = media.len(),
            shown = selected.len(),
            sort = self.sort.as_str(),
            "Arranged gallery"
        );

        selected
    }
}

/// Letters newest first, as the journal lists them
pub fn journal_order(letters: &[LetterItem]) -> Vec<&LetterItem> {
    let mut ordered: Vec<&LetterItem> = letters.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));
    ordered
}

/// Letters that fall on `day` in the viewer's timezone
pub fn letters_dated_on<'a, Tz: TimeZone>(
    letters: &'a [LetterItem],
    day: NaiveDate,
    tz: &Tz,
) -> Vec<&'a LetterItem> {
    letters.iter().filter(|l| l.is_dated_on(day, tz)).collect()
}
