//! Star systems on the galaxy map and the planets orbiting them.

use crate::names;
use crate::planet::{random_tint, Planet};
use engine_core::{DVec2, Hsla, MapEntity};
use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// Half-extent of the square the starting system is placed in.
pub const START_REGION: f64 = 500.0;
/// Inclusive range of planets generated per system visit.
pub const PLANETS_PER_SYSTEM: (usize, usize) = (3, 7);

/// A star on the galaxy map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    pub name: String,
    /// World-space position on the galaxy map.
    pub position: DVec2,
    pub color: Hsla,
    /// Set once the player has arrived here.
    #[serde(default)]
    pub visited: bool,
}

impl StarSystem {
    /// New unvisited system with a random name and color.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, position: DVec2) -> Self {
        Self {
            name: names::system_name(rng),
            position,
            color: random_tint(rng, 0.7, 0.6, 1.0),
            visited: false,
        }
    }

    /// The player's home system, somewhere near the galactic core.
    pub fn generate_start<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let position = DVec2::new(
            rng.gen::<f64>() * 2.0 * START_REGION - START_REGION,
            rng.gen::<f64>() * 2.0 * START_REGION - START_REGION,
        );
        Self::generate(rng, position)
    }

    /// Euclidean distance to another system.
    pub fn distance_to(&self, other: &StarSystem) -> f64 {
        self.position.distance(other.position)
    }
}

impl MapEntity for StarSystem {
    fn map_position(&self) -> DVec2 {
        self.position
    }
}

/// A planet placed in orbit around the system's star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalBody {
    pub planet: Planet,
    /// Offset from the star, in system-view units.
    pub offset: DVec2,
    /// Display radius.
    pub size: f32,
    /// Current spin angle in radians.
    pub rotation: f32,
    /// Radians per tick.
    pub rotation_speed: f32,
}

impl OrbitalBody {
    /// Distance from the star.
    pub fn orbital_radius(&self) -> f64 {
        self.offset.length()
    }

    /// Advance the spin by one tick.
    pub fn spin(&mut self) {
        self.rotation = (self.rotation + self.rotation_speed).rem_euclid(std::f32::consts::TAU);
    }
}

/// Generate the planets for one system visit.
///
/// Bodies are spread evenly by angle (body `i` of `n` at `i/n · 2π`) at a
/// random distance from the star.
pub fn populate_system<R: Rng + ?Sized>(rng: &mut R) -> Vec<OrbitalBody> {
    let count = rng.gen_range(PLANETS_PER_SYSTEM.0..=PLANETS_PER_SYSTEM.1);
    (0..count)
        .map(|i| {
            let angle = i as f64 / count as f64 * std::f64::consts::TAU;
            let distance: f64 = rng.gen_range(150.0..350.0);
            let planet = Planet::generate_with(rng);
            OrbitalBody {
                planet,
                offset: DVec2::new(angle.cos(), angle.sin()) * distance,
                size: rng.gen_range(20.0..50.0),
                rotation: 0.0,
                rotation_speed: (rng.gen::<f32>() - 0.5) * 0.02,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_system_within_start_region() {
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..100 {
            let s = StarSystem::generate_start(&mut rng);
            assert!(s.position.x >= -START_REGION && s.position.x < START_REGION);
            assert!(s.position.y >= -START_REGION && s.position.y < START_REGION);
            assert!(!s.visited);
            assert!(!s.name.is_empty());
        }
    }

    #[test]
    fn populate_system_places_bodies_in_ring() {
        let mut rng = StdRng::seed_from_u64(314);
        for _ in 0..20 {
            let bodies = populate_system(&mut rng);
            assert!((3..=7).contains(&bodies.len()));
            for b in &bodies {
                let r = b.orbital_radius();
                assert!((150.0 - 1e-9..350.0).contains(&r), "radius {}", r);
                assert!((20.0..50.0).contains(&b.size));
                assert!(b.rotation_speed.abs() <= 0.01);
                assert_eq!(b.rotation, 0.0);
            }
            // First body always sits on the +X axis.
            assert!(bodies[0].offset.y.abs() < 1e-9);
            assert!(bodies[0].offset.x > 0.0);
        }
    }

    #[test]
    fn spin_wraps_rotation() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut body = populate_system(&mut rng).remove(0);
        body.rotation = 6.28;
        body.rotation_speed = 0.01;
        body.spin();
        assert!(body.rotation >= 0.0 && body.rotation < std::f32::consts::TAU);
    }
}
