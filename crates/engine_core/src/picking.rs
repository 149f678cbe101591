//! Screen-space hit testing for entities on the galaxy map.

use crate::viewport::Viewport;
use glam::DVec2;

/// Hit radius in screen pixels at zoom 1.0.
pub const DEFAULT_HIT_RADIUS: f64 = 40.0;

/// Anything with a position on the galaxy map.
pub trait MapEntity {
    /// World-space position.
    fn map_position(&self) -> DVec2;
}

impl MapEntity for DVec2 {
    fn map_position(&self) -> DVec2 {
        *self
    }
}

/// Finds the entity under a screen point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialPicker {
    /// Hit radius in screen pixels; divided by zoom to get the world radius.
    pub base_hit_radius: f64,
}

impl Default for SpatialPicker {
    fn default() -> Self {
        Self {
            base_hit_radius: DEFAULT_HIT_RADIUS,
        }
    }
}

impl SpatialPicker {
    pub fn new(base_hit_radius: f64) -> Self {
        Self { base_hit_radius }
    }

    /// World-space hit radius at the viewport's zoom, so the on-screen target
    /// stays the same size at every zoom level.
    pub fn hit_radius(&self, viewport: &Viewport) -> f64 {
        self.base_hit_radius / viewport.zoom()
    }

    /// Index of the entity nearest to `screen`, if it lies strictly within the hit radius.
    ///
    /// Equal distances resolve to the entity that comes first in `entities`.
    pub fn pick<T: MapEntity>(
        &self,
        viewport: &Viewport,
        screen: DVec2,
        entities: &[T],
    ) -> Option<usize> {
        let world = viewport.screen_to_world(screen);
        let mut nearest = None;
        let mut nearest_dist = self.hit_radius(viewport);

        for (i, entity) in entities.iter().enumerate() {
            let dist = world.distance(entity.map_position());
            if dist < nearest_dist {
                nearest_dist = dist;
                nearest = Some(i);
            }
        }
        nearest
    }
}
