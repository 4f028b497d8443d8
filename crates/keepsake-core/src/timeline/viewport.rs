//! Zoom and horizontal scroll state of the timeline track
//!
//! Positions produced by the time axis are percentages of the zoomed track,
//! so changing the zoom never requires recomputing them. The controller only
//! computes target offsets; animating towards them is the renderer's job.

use serde::{Deserialize, Serialize};

use crate::config::TimelineConfig;

/// Scroll intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Transform handed to the renderer each pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewportTransform {
    pub zoom: f64,
    pub scroll_offset_px: f64,
}

/// Viewport controller
///
/// Zoom always stays inside the configured bounds. The scroll offset is
/// not bounded here; the rendering surface clamps it to its content width.
#[derive(Debug, Clone)]
pub struct ViewportController {
    config: TimelineConfig,
    zoom: f64,
    scroll_offset_px: f64,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(TimelineConfig::default())
    }
}

impl ViewportController {
    /// Create a controller; the initial zoom is clamped into bounds
    pub fn new(config: TimelineConfig) -> Self {
        // max/min rather than clamp: unvalidated bounds must not panic
        let zoom = config.initial_zoom.max(config.min_zoom).min(config.max_zoom);
        Self {
            config,
            zoom,
            scroll_offset_px: 0.0,
        }
    }

    /// Get current configuration
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[inline]
    pub fn scroll_offset_px(&self) -> f64 {
        self.scroll_offset_px
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < self.config.max_zoom
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom > self.config.min_zoom
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.zoom = (self.zoom + self.config.zoom_step).min(self.config.max_zoom);
        self.zoom
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.zoom = (self.zoom - self.config.zoom_step).max(self.config.min_zoom);
        self.zoom
    }

    /// Move the target offset by a fraction of the visible width
    ///
    /// Returns the new target offset.
    pub fn scroll(&mut self, direction: ScrollDirection, viewport_width_px: f64) -> f64 {
        let amount = viewport_width_px * self.config.scroll_fraction;
        self.scroll_offset_px += match direction {
            ScrollDirection::Left => -amount,
            ScrollDirection::Right => amount,
        };
        self.scroll_offset_px
    }

    /// Record the offset the renderer actually settled on
    pub fn set_scroll_offset(&mut self, offset_px: f64) {
        self.scroll_offset_px = offset_px;
    }

    /// Width of the zoomed track for a given viewport width
    #[inline]
    pub fn track_width(&self, viewport_width_px: f64) -> f64 {
        viewport_width_px * self.zoom
    }

    /// Screen x coordinate of a track percentage, relative to the viewport's left edge
    pub fn screen_x(&self, position_percent: f64, viewport_width_px: f64) -> f64 {
        position_percent / 100.0 * self.track_width(viewport_width_px) - self.scroll_offset_px
    }

    pub fn transform(&self) -> ViewportTransform {
        ViewportTransform {
            zoom: self.zoom,
            scroll_offset_px: self.scroll_offset_px,
        }
    }
}
