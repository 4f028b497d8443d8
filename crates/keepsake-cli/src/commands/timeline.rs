use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use keepsake_core::{
    memory::{DatedItem, MediaKind},
    storage::{Database, LetterRepository, MediaRepository},
    timeline::{ScrollDirection, TimelineEntry, TimelineLayout, ViewportController, ViewportTransform},
    AppConfig,
};

#[derive(Args, Debug)]
pub struct TimelineArgs {
    /// Visible width in columns
    #[arg(short, long, default_value_t = 80)]
    pub width: usize,
    /// Zoom in this many steps
    #[arg(long, default_value_t = 0)]
    pub zoom_in: u32,
    /// Zoom out this many steps
    #[arg(long, default_value_t = 0)]
    pub zoom_out: u32,
    /// Scroll one step left or right (repeatable, applied in order)
    #[arg(long, value_enum)]
    pub scroll: Vec<ScrollArg>,
    /// Print the layout as JSON instead of drawing it
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ScrollArg {
    Left,
    Right,
}

impl From<ScrollArg> for ScrollDirection {
    fn from(arg: ScrollArg) -> Self {
        match arg {
            ScrollArg::Left => ScrollDirection::Left,
            ScrollArg::Right => ScrollDirection::Right,
        }
    }
}

#[derive(Serialize)]
struct JsonView<'a> {
    layout: &'a TimelineLayout<'a>,
    viewport: ViewportTransform,
}

pub async fn run(db: &Database, config: &AppConfig, args: TimelineArgs) -> Result<()> {
    if args.width < 10 {
        bail!("Timeline width must be at least 10 columns");
    }

    let media = MediaRepository::new(db).list_all().await?;
    let letters = LetterRepository::new(db).list_all().await?;

    if media.is_empty() && letters.is_empty() {
        println!("Nothing on the timeline yet.");
        println!("Add photos, videos or letters to see them here.");
        return Ok(());
    }

    let layout = TimelineLayout::build(&media, &letters);

    let mut viewport = ViewportController::new(config.timeline);
    for _ in 0..args.zoom_in {
        viewport.zoom_in();
    }
    for _ in 0..args.zoom_out {
        viewport.zoom_out();
    }

    let span = span_of(args.width);
    for step in &args.scroll {
        viewport.scroll((*step).into(), span);
    }
    settle_scroll(&mut viewport, span);

    if args.json {
        let view = JsonView {
            layout: &layout,
            viewport: viewport.transform(),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    for line in render(&layout, &viewport, args.width) {
        println!("{}", line);
    }

    Ok(())
}

/// Distance in columns between the first and last visible column
fn span_of(width: usize) -> f64 {
    width.saturating_sub(1) as f64
}

/// Clamp the scroll offset to the drawable track, as a scroll surface would
fn settle_scroll(viewport: &mut ViewportController, span: f64) {
    let max_offset = (viewport.track_width(span) - span).max(0.0);
    let settled = viewport.scroll_offset_px().clamp(0.0, max_offset);
    viewport.set_scroll_offset(settled);
}

fn glyph(entry: &TimelineEntry<'_>) -> char {
    match entry {
        TimelineEntry::Media(m) if m.kind == MediaKind::Video => '>',
        TimelineEntry::Media(_) => 'o',
        TimelineEntry::Letter(_) => '@',
    }
}

/// Visible column for a track percentage, if on screen
fn column(viewport: &ViewportController, percent: f64, width: usize) -> Option<usize> {
    let x = viewport.screen_x(percent, span_of(width)).round();
    if x >= 0.0 && x < width as f64 {
        Some(x as usize)
    } else {
        None
    }
}

/// Draw the visible window of the track as text lines
fn render(layout: &TimelineLayout<'_>, viewport: &ViewportController, width: usize) -> Vec<String> {
    let mut items = vec![' '; width];
    let mut axis = vec!['-'; width];
    let mut labels = vec![' '; width];

    for marker in &layout.markers {
        if let Some(col) = column(viewport, marker.position_percent, width) {
            axis[col] = '|';
            for (i, ch) in marker.year().to_string().chars().enumerate() {
                if let Some(slot) = labels.get_mut(col + i) {
                    *slot = ch;
                }
            }
        }
    }

    let mut listing = Vec::with_capacity(layout.entries.len());
    for placed in &layout.entries {
        let col = column(viewport, placed.position_percent, width);
        if let Some(col) = col {
            // Several items on one column collapse into '*'
            items[col] = if items[col] == ' ' { glyph(&placed.entry) } else { '*' };
        }

        let visible = col.map_or_else(|| "off-screen".to_string(), |c| format!("col {}", c));
        listing.push(format!(
            "  {} {} {:<30} {:>6.2}%  {}",
            glyph(&placed.entry),
            placed.entry.date().format("%Y-%m-%d"),
            placed.entry.title(),
            placed.position_percent,
            visible
        ));
    }

    let transform = viewport.transform();
    let mut lines = vec![
        format!(
            "Timeline {} .. {}  zoom {:.1}x  offset {:.0}",
            layout.range.min.format("%Y-%m-%d"),
            layout.range.max.format("%Y-%m-%d"),
            transform.zoom,
            transform.scroll_offset_px
        ),
        String::new(),
        items.into_iter().collect(),
        axis.into_iter().collect(),
        labels.into_iter().collect(),
        String::new(),
    ];
    lines.extend(listing);
    lines.push(String::new());
    lines.push("  o photo   > video   @ letter   * several".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use keepsake_core::memory::{LetterItem, MediaItem};
    use keepsake_core::TimelineConfig;
    use uuid::Uuid;

    fn photo(title: &str, year: i32) -> MediaItem {
        let date = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap();
        MediaItem {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            date,
            file_path: format!("{}.jpg", title),
            kind: MediaKind::Image,
            created_at: date,
            tags: Vec::new(),
        }
    }

    fn letter(title: &str, year: i32) -> LetterItem {
        let date = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap();
        LetterItem {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: String::new(),
            date,
            created_at: date,
        }
    }

    #[test]
    fn test_render_places_ends_of_range() {
        let media = vec![photo("first", 2020)];
        let letters = vec![letter("last", 2022)];
        let layout = TimelineLayout::build(&media, &letters);
        let viewport = ViewportController::default();

        let lines = render(&layout, &viewport, 21);
        let track: Vec<char> = lines[2].chars().collect();
        assert_eq!(track.len(), 21);
        assert_eq!(track[0], 'o');
        assert_eq!(track[20], '@');
        assert!(lines[4].starts_with("2020"));
    }

    #[test]
    fn test_zoomed_scroll_hides_left_items() {
        let media = vec![photo("first", 2020)];
        let letters = vec![letter("last", 2022)];
        let layout = TimelineLayout::build(&media, &letters);

        let mut viewport = ViewportController::new(TimelineConfig::default());
        viewport.zoom_in();
        viewport.zoom_in();
        let span = span_of(21);
        viewport.scroll(ScrollDirection::Right, span);
        settle_scroll(&mut viewport, span);

        assert_eq!(column(&viewport, 0.0, 21), None);
        assert!(lines_contain(&render(&layout, &viewport, 21), "off-screen"));
    }

    #[test]
    fn test_settle_scroll_clamps_offset() {
        let mut viewport = ViewportController::default();
        viewport.scroll(ScrollDirection::Left, 100.0);
        settle_scroll(&mut viewport, 100.0);
        assert_eq!(viewport.scroll_offset_px(), 0.0);

        viewport.zoom_in();
        for _ in 0..10 {
            viewport.scroll(ScrollDirection::Right, 100.0);
        }
        settle_scroll(&mut viewport, 100.0);
        assert_eq!(viewport.scroll_offset_px(), 50.0);
    }

    fn lines_contain(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|l| l.contains(needle))
    }
}
