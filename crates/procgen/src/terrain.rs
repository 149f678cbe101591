//! 1-D surface heightmaps for planet side views.
//!
//! Heights are a sum of sine octaves plus per-sample jitter. The sine base
//! gives every planet the same rolling shape; the jitter comes from the
//! caller's RNG, so a seeded stream reproduces a heightmap exactly.

use rand::prelude::*;

/// Number of samples in a planet surface.
pub const TERRAIN_WIDTH: usize = 800;

/// Configuration for terrain synthesis.
#[derive(Debug, Clone)]
pub struct TerrainConfig {
    /// Starting height of every sample before octaves are added.
    pub base_height: f32,
    /// Number of octaves summed.
    pub octaves: u32,
    /// Amplitude of the first octave.
    pub amplitude: f32,
    /// Angular step per sample for the first octave.
    pub frequency: f32,
    /// Frequency multiplier per octave.
    pub lacunarity: f32,
    /// Amplitude multiplier per octave.
    pub persistence: f32,
    /// Jitter range as a fraction of the octave amplitude.
    pub jitter: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            base_height: 400.0,
            octaves: 3,
            amplitude: 100.0,
            frequency: 0.01,
            lacunarity: 2.0,
            persistence: 0.5,
            jitter: 0.2,
        }
    }
}

impl TerrainConfig {
    /// Build a heightmap of `width` samples.
    ///
    /// Values are not clamped; with the default config they stay roughly
    /// within `base_height ± 200` but callers must not rely on a range.
    pub fn synthesize<R: Rng + ?Sized>(&self, rng: &mut R, width: usize) -> Vec<f32> {
        let mut heights = vec![self.base_height; width];

        for octave in 0..self.octaves {
            let frequency = self.lacunarity.powi(octave as i32);
            let amplitude = self.persistence.powi(octave as i32) * self.amplitude;

            for (i, h) in heights.iter_mut().enumerate() {
                *h += (i as f32 * self.frequency * frequency).sin() * amplitude;
                *h += (rng.gen::<f32>() - 0.5) * amplitude * self.jitter;
            }
        }
        heights
    }
}

/// Heightmap with the default config.
pub fn synthesize<R: Rng + ?Sized>(rng: &mut R, width: usize) -> Vec<f32> {
    TerrainConfig::default().synthesize(rng, width)
}

/// Surface height under horizontal position `x`. Positions outside the
/// terrain read the nearest edge sample; an empty terrain reads 0.
pub fn height_at(terrain: &[f32], x: f32) -> f32 {
    if terrain.is_empty() {
        return 0.0;
    }
    let idx = if x.is_finite() && x > 0.0 {
        (x.floor() as usize).min(terrain.len() - 1)
    } else {
        0
    };
    terrain[idx]
}
