//! Pan/zoom viewport mapping between galaxy-map world space and screen space.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Smallest allowed zoom factor.
pub const MIN_ZOOM: f64 = 0.1;
/// Largest allowed zoom factor.
pub const MAX_ZOOM: f64 = 2.0;
/// Zoom change per unit of mouse-wheel delta.
pub const WHEEL_ZOOM_SPEED: f64 = 0.001;

/// Offset + zoom state of the galaxy map.
///
/// `screen = world * zoom + offset`. The zoom is always kept in
/// [`MIN_ZOOM`, `MAX_ZOOM`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    offset: DVec2,
    zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: DVec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    /// Create a viewport; `zoom` is clamped into range.
    pub fn new(offset: DVec2, zoom: f64) -> Self {
        Self {
            offset,
            zoom: clamp_zoom(zoom),
        }
    }

    /// Viewport whose world origin sits at the center of a `width` x `height` canvas.
    pub fn centered(width: u32, height: u32, zoom: f64) -> Self {
        Self::new(DVec2::new(width as f64 / 2.0, height as f64 / 2.0), zoom)
    }

    pub fn offset(&self) -> DVec2 {
        self.offset
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn set_offset(&mut self, offset: DVec2) {
        self.offset = offset;
    }

    /// Map a world position to screen pixels.
    #[inline]
    pub fn world_to_screen(&self, world: DVec2) -> DVec2 {
        world * self.zoom + self.offset
    }

    /// Map screen pixels back to a world position (exact inverse of [`Self::world_to_screen`]).
    #[inline]
    pub fn screen_to_world(&self, screen: DVec2) -> DVec2 {
        (screen - self.offset) / self.zoom
    }

    /// Change zoom while keeping the world point under `anchor` fixed on screen.
    ///
    /// The requested zoom is clamped before the offset is recomputed, so the
    /// ratio applied to the offset is the ratio actually taken. Pinned at a
    /// limit, the ratio is 1 and the offset does not move.
    pub fn zoom_around(&mut self, anchor: DVec2, new_zoom: f64) {
        let old_zoom = self.zoom;
        let clamped = clamp_zoom(new_zoom);
        if clamped != new_zoom {
            log::trace!("zoom {} clamped to {}", new_zoom, clamped);
        }
        if clamped == old_zoom {
            return;
        }
        let ratio = clamped / old_zoom;
        self.offset = anchor - (anchor - self.offset) * ratio;
        self.zoom = clamped;
    }

    /// Mouse-wheel zoom: positive `delta_y` (scroll down) zooms out.
    pub fn zoom_by_wheel(&mut self, anchor: DVec2, delta_y: f64) {
        self.zoom_around(anchor, self.zoom - delta_y * WHEEL_ZOOM_SPEED);
    }
}

#[inline]
fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return MIN_ZOOM;
    }
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}
