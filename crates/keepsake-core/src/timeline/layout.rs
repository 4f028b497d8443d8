use chrono::{DateTime, Utc};
use serde::Serialize;

use super::axis::TimeRange;
use super::markers::{generate_year_markers, Marker};
use super::merge::{merge, TimelineEntry};
use crate::memory::{DatedItem, LetterItem, MediaItem};

/// An entry with its place on the track
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlacedEntry<'a> {
    #[serde(flatten)]
    pub entry: TimelineEntry<'a>,
    pub position_percent: f64,
}

/// Everything a renderer needs for one pass over the timeline
#[derive(Debug, Clone, Serialize)]
pub struct TimelineLayout<'a> {
    pub range: TimeRange,
    pub markers: Vec<Marker>,
    pub entries: Vec<PlacedEntry<'a>>,
}

impl<'a> TimelineLayout<'a> {
    pub fn build(media: &'a [MediaItem], letters: &'a [LetterItem]) -> Self {
        Self::build_at(media, letters, Utc::now())
    }

    /// Build with an explicit instant for the empty-range fallback
    pub fn build_at(media: &'a [MediaItem], letters: &'a [LetterItem], now: DateTime<Utc>) -> Self {
        let merged = merge(media, letters);
        let range = TimeRange::compute_at(&merged, now);

        // Nothing to annotate without items
        let markers = if merged.is_empty() {
            Vec::new()
        } else {
            generate_year_markers(&range)
        };

        let entries: Vec<PlacedEntry<'a>> = merged
            .into_iter()
            .map(|entry| PlacedEntry {
                position_percent: range.position_of(entry.date()),
                entry,
            })
            .collect();

        tracing::debug!(
            media = media.len(),
            letters = letters.len(),
            markers = markers.len(),
            min = %range.min,
            max = %range.max,
            "Built timeline layout"
        );

        Self {
            range,
            markers,
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MediaKind;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn photo(date: DateTime<Utc>) -> MediaItem {
        MediaItem {
            id: Uuid::new_v4(),
            title: "photo".to_string(),
            description: None,
            date,
            file_path: "photo.png".to_string(),
            kind: MediaKind::Image,
            created_at: date,
            tags: Vec::new(),
        }
    }

    fn letter(date: DateTime<Utc>) -> LetterItem {
        LetterItem {
            id: Uuid::new_v4(),
            title: "letter".to_string(),
            content: "je t'aime".to_string(),
            date,
            created_at: date,
        }
    }

    #[test]
    fn test_empty_layout_has_no_markers() {
        let now = day(2026, 10, 19);
        let layout = TimelineLayout::build_at(&[], &[], now);
        assert!(layout.is_empty());
        assert!(layout.markers.is_empty());
        assert_eq!(layout.range, TimeRange::instant(now));
    }

    #[test]
    fn test_single_item_is_centered() {
        let media = vec![photo(day(2023, 7, 1))];
        let layout = TimelineLayout::build(&media, &[]);

        assert_eq!(layout.range, TimeRange::instant(day(2023, 7, 1)));
        assert_eq!(layout.entries.len(), 1);
        assert_eq!(layout.entries[0].position_percent, 50.0);
        assert_eq!(layout.markers.len(), 1);
        assert_eq!(layout.markers[0].position_percent, 50.0);
    }

    #[test]
    fn test_mixed_items_span_the_track() {
        let media = vec![photo(day(2024, 6, 15)), photo(day(2022, 3, 24))];
        let letters = vec![letter(day(2020, 1, 1))];
        let layout = TimelineLayout::build(&media, &letters);

        assert_eq!(layout.range.min, day(2020, 1, 1));
        assert_eq!(layout.range.max, day(2024, 6, 15));
        assert_eq!(layout.markers.len(), 5);

        let positions: Vec<f64> = layout.entries.iter().map(|e| e.position_percent).collect();
        assert_eq!(positions[0], 0.0);
        assert!((positions[1] - 50.0).abs() < 0.1);
        assert_eq!(positions[2], 100.0);
        assert!(layout.entries[0].entry.is_letter());
    }
}
