use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::memory::DatedItem;

/// Position used when the range has no width
pub const CENTER_PERCENT: f64 = 50.0;

/// Span of dates covered by one render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub min: DateTime<Utc>,
    pub max: DateTime<Utc>,
}

impl TimeRange {
    /// Single-instant range
    pub fn instant(at: DateTime<Utc>) -> Self {
        Self { min: at, max: at }
    }

    /// Range over the items, or the current instant when there are none
    pub fn compute<T: DatedItem>(items: &[T]) -> Self {
        Self::compute_at(items, Utc::now())
    }

    /// Same as [`TimeRange::compute`] with an explicit fallback instant
    pub fn compute_at<T: DatedItem>(items: &[T], now: DateTime<Utc>) -> Self {
        let mut dates = items.iter().map(DatedItem::date);

        let Some(first) = dates.next() else {
            return Self::instant(now);
        };

        let (min, max) = dates.fold((first, first), |(min, max), date| {
            (min.min(date), max.max(date))
        });

        Self { min, max }
    }

    /// True when min and max coincide
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    pub fn span_ms(&self) -> i64 {
        (self.max - self.min).num_milliseconds()
    }

    /// Position of `date` on this range as a percentage
    ///
    /// A degenerate range centers everything. Dates outside the range are
    /// clamped to the nearest end.
    pub fn position_of(&self, date: DateTime<Utc>) -> f64 {
        let span = self.span_ms();
        if span == 0 {
            return CENTER_PERCENT;
        }

        let offset = (date - self.min).num_milliseconds();
        let percent = offset as f64 / span as f64 * 100.0;

        if !(0.0..=100.0).contains(&percent) {
            tracing::warn!(%date, min = %self.min, max = %self.max, "Date outside timeline range, clamping");
        }
        percent.clamp(0.0, 100.0)
    }
}
