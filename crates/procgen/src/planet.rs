//! Planet generation: surface, atmosphere, decorations, resources and fauna.
//!
//! Each part of a planet is rolled independently from the same RNG stream.
//! `Planet::generate()` draws from the thread RNG, so every call yields a new
//! world; `Planet::generate_with` takes any `Rng` for seeded replay.

use crate::biome::Biome;
use crate::names;
use crate::terrain::{self, TERRAIN_WIDTH};
use engine_core::Hsla;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decorations placed on every planet.
pub const FEATURE_COUNT: usize = 20;
/// Inclusive range of resource deposits per planet.
pub const RESOURCE_COUNT: (usize, usize) = (2, 5);
/// Inclusive range of creatures per planet.
pub const FAUNA_COUNT: (usize, usize) = (3, 10);

/// Random hue at fixed saturation/lightness.
pub fn random_tint<R: Rng + ?Sized>(rng: &mut R, saturation: f32, lightness: f32, alpha: f32) -> Hsla {
    Hsla::new(rng.gen::<f32>() * 360.0, saturation, lightness, alpha)
}

/// Translucent halo drawn around a planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Atmosphere {
    pub color: Hsla,
    /// Thickness of the halo in surface units.
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    Tree,
    Rock,
}

/// Decorative prop on the surface. Generated once, never changed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceFeature {
    /// Horizontal position along the terrain.
    pub x: f32,
    pub kind: FeatureKind,
    pub height: f32,
}

/// Minable resource tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Carbon,
    Iron,
    Gold,
    Uranium,
    Plutonium,
    Thamium9,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::Carbon,
        Resource::Iron,
        Resource::Gold,
        Resource::Uranium,
        Resource::Plutonium,
        Resource::Thamium9,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Resource::Carbon => "carbon",
            Resource::Iron => "iron",
            Resource::Gold => "gold",
            Resource::Uranium => "uranium",
            Resource::Plutonium => "plutonium",
            Resource::Thamium9 => "thamium9",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body plans for creatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaunaKind {
    /// Four-legged walker.
    Quadruped,
    Flying,
    /// Amorphous blob.
    Blob,
    /// Snake-like crawler.
    Serpent,
    /// Jumping creature.
    Hopper,
}

impl FaunaKind {
    pub const ALL: [FaunaKind; 5] = [
        FaunaKind::Quadruped,
        FaunaKind::Flying,
        FaunaKind::Blob,
        FaunaKind::Serpent,
        FaunaKind::Hopper,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FaunaKind::Quadruped => "quadruped",
            FaunaKind::Flying => "flying",
            FaunaKind::Blob => "blob",
            FaunaKind::Serpent => "serpent",
            FaunaKind::Hopper => "hopper",
        }
    }
}

/// A creature wandering the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fauna {
    pub kind: FaunaKind,
    pub x: f32,
    /// Surface units per tick.
    pub speed: f32,
    /// -1 (left) or +1 (right).
    pub direction: i8,
    pub size: f32,
}

impl Fauna {
    fn generate<R: Rng + ?Sized>(rng: &mut R, surface_width: f32) -> Self {
        Self {
            kind: FaunaKind::ALL[rng.gen_range(0..FaunaKind::ALL.len())],
            x: rng.gen_range(0.0..surface_width),
            speed: rng.gen_range(0.5..2.5),
            direction: if rng.gen_bool(0.5) { 1 } else { -1 },
            size: rng.gen_range(10.0..30.0),
        }
    }

    /// Advance one simulation tick. Turns around once it has walked past
    /// either end of `[0, bound]`.
    pub fn advance(&mut self, bound: f32) {
        self.x += self.speed * self.direction as f32;
        if self.x < 0.0 || self.x > bound {
            self.direction = -self.direction;
        }
    }
}

/// A procedurally generated planet, without orbital placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    /// Surface heights, one per horizontal unit.
    pub terrain: Vec<f32>,
    /// Degrees Celsius, [-100, 200).
    pub temperature: i32,
    pub atmosphere: Atmosphere,
    pub features: Vec<SurfaceFeature>,
    /// Deposits; the same tag may appear more than once.
    pub resources: Vec<Resource>,
    pub animals: Vec<Fauna>,
    pub biome: Biome,
    pub color: Hsla,
}

impl Planet {
    /// Generate a new random planet.
    pub fn generate() -> Self {
        Self::generate_with(&mut thread_rng())
    }

    /// Generate a planet from the given random stream.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let name = names::planet_name(rng);
        let terrain = terrain::synthesize(rng, TERRAIN_WIDTH);
        let width = terrain.len() as f32;
        let temperature = rng.gen_range(-100..200);

        let atmosphere = Atmosphere {
            color: random_tint(rng, 0.7, 0.5, 0.3),
            height: rng.gen_range(20.0..50.0),
        };

        let features = (0..FEATURE_COUNT)
            .map(|_| SurfaceFeature {
                x: rng.gen_range(0.0..width),
                kind: if rng.gen_bool(0.5) {
                    FeatureKind::Tree
                } else {
                    FeatureKind::Rock
                },
                height: rng.gen_range(10.0..30.0),
            })
            .collect();

        let resource_count = rng.gen_range(RESOURCE_COUNT.0..=RESOURCE_COUNT.1);
        let resources = (0..resource_count)
            .map(|_| Resource::ALL[rng.gen_range(0..Resource::ALL.len())])
            .collect();

        let fauna_count = rng.gen_range(FAUNA_COUNT.0..=FAUNA_COUNT.1);
        let animals = (0..fauna_count)
            .map(|_| Fauna::generate(rng, width))
            .collect();

        let color = random_tint(rng, 0.7, 0.6, 1.0);
        let biome = Biome::random(rng);

        let planet = Self {
            name,
            terrain,
            temperature,
            atmosphere,
            features,
            resources,
            animals,
            biome,
            color,
        };
        log::debug!(
            "Generated planet {} ({}, {}°C, {} creatures)",
            planet.name,
            planet.biome,
            planet.temperature,
            planet.animals.len()
        );
        planet
    }

    /// Surface height under `x`.
    pub fn surface_height(&self, x: f32) -> f32 {
        terrain::height_at(&self.terrain, x)
    }

    /// Advance every creature by one tick, bouncing inside `[0, bound]`.
    pub fn update_fauna(&mut self, bound: f32) {
        for animal in &mut self.animals {
            animal.advance(bound);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn planet_arrays_have_expected_lengths() {
        let mut rng = StdRng::seed_from_u64(31337);
        for _ in 0..200 {
            let p = Planet::generate_with(&mut rng);
            assert_eq!(p.terrain.len(), TERRAIN_WIDTH);
            assert_eq!(p.features.len(), FEATURE_COUNT);
            assert!((2..=5).contains(&p.resources.len()));
            assert!((3..=10).contains(&p.animals.len()));
        }
    }

    #[test]
    fn planet_values_within_ranges() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..200 {
            let p = Planet::generate_with(&mut rng);
            assert!((-100..200).contains(&p.temperature));
            assert!((20.0..50.0).contains(&p.atmosphere.height));
            assert!((p.atmosphere.color.alpha - 0.3).abs() < 1e-6);
            for f in &p.features {
                assert!(f.x >= 0.0 && f.x < TERRAIN_WIDTH as f32);
                assert!((10.0..30.0).contains(&f.height));
            }
            for a in &p.animals {
                assert!(a.x >= 0.0 && a.x < TERRAIN_WIDTH as f32);
                assert!((0.5..2.5).contains(&a.speed));
                assert!(a.direction == 1 || a.direction == -1);
                assert!((10.0..30.0).contains(&a.size));
            }
        }
    }

    #[test]
    fn planet_draws_from_all_vocabularies() {
        let mut rng = StdRng::seed_from_u64(77);
        let mut resources = HashSet::new();
        let mut kinds = HashSet::new();
        let mut features = HashSet::new();
        let mut biomes = HashSet::new();
        for _ in 0..300 {
            let p = Planet::generate_with(&mut rng);
            resources.extend(p.resources.iter().copied());
            kinds.extend(p.animals.iter().map(|a| a.kind));
            features.extend(p.features.iter().map(|f| f.kind));
            biomes.insert(p.biome);
        }
        assert_eq!(resources.len(), Resource::ALL.len());
        assert_eq!(kinds.len(), FaunaKind::ALL.len());
        assert_eq!(features.len(), 2);
        assert_eq!(biomes.len(), Biome::ALL.len());
    }

    #[test]
    fn consecutive_planets_get_different_names() {
        let mut rng = StdRng::seed_from_u64(5150);
        let names: HashSet<String> = (0..50).map(|_| Planet::generate_with(&mut rng).name).collect();
        assert!(names.len() > 40);
        assert_ne!(Planet::generate().terrain, Planet::generate().terrain);
    }

    #[test]
    fn same_seed_same_planet() {
        let a = Planet::generate_with(&mut StdRng::seed_from_u64(42));
        let b = Planet::generate_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn fauna_turns_around_past_bounds() {
        let mut animal = Fauna {
            kind: FaunaKind::Blob,
            x: 799.0,
            speed: 2.0,
            direction: 1,
            size: 12.0,
        };
        animal.advance(800.0);
        assert_eq!(animal.x, 801.0);
        assert_eq!(animal.direction, -1);
        animal.advance(800.0);
        assert_eq!(animal.x, 799.0);
        assert_eq!(animal.direction, -1);

        let mut left = Fauna { x: 0.5, ..animal };
        left.advance(800.0);
        assert_eq!(left.direction, 1);
    }

    /// Float draws land on the largest value `gen::<f32>()` can return;
    /// integer and bool draws see zero.
    struct TopOfRangeRng;

    impl RngCore for TopOfRangeRng {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn fauna_ranges_exclude_upper_bound() {
        let animal = Fauna::generate(&mut TopOfRangeRng, 800.0);
        assert!(animal.x < 800.0, "x {}", animal.x);
        assert!(animal.speed < 2.5, "speed {}", animal.speed);
        assert!(animal.size < 30.0, "size {}", animal.size);
        assert!(animal.speed > 2.4);
    }
}
