//! Timeline layout engine
//!
//! Media and letters are merged into one chronological sequence, placed on a
//! proportional time axis, annotated with yearly markers and shown through a
//! zoomable, scrollable viewport.
//!
//! ```ignore
//! let layout = TimelineLayout::build(&media, &letters);
//! let mut viewport = ViewportController::new(config.timeline);
//! viewport.zoom_in();
//! for placed in &layout.entries {
//!     let x = viewport.screen_x(placed.position_percent, width);
//! }
//! ```

mod axis;
mod layout;
mod markers;
mod merge;
mod viewport;

pub use axis::{TimeRange, CENTER_PERCENT};
pub use layout::{PlacedEntry, TimelineLayout};
pub use markers::{add_years, generate_year_markers, Marker, ONE_YEAR_MS};
pub use merge::{merge, TimelineEntry};
pub use viewport::{ScrollDirection, ViewportController, ViewportTransform};
