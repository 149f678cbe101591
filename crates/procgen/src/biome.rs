//! Planet biome classification.
//!
//! Biomes are flavor only: they are shown in the planet HUD and do not feed
//! back into terrain or fauna generation.

use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Types of biomes a planet can be classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    /// Dense vegetation, breathable air.
    Lush,
    /// Poisonous atmosphere and chemical pools.
    Toxic,
    /// Irradiated surface.
    Radioactive,
    /// Arid dunes and rock.
    Desert,
    /// Ice sheets and permafrost.
    Frozen,
    /// Lava fields and ash.
    Volcanic,
    /// Anything that fits no other category.
    Exotic,
}

impl Biome {
    /// Every biome, in declaration order.
    pub const ALL: [Biome; 7] = [
        Biome::Lush,
        Biome::Toxic,
        Biome::Radioactive,
        Biome::Desert,
        Biome::Frozen,
        Biome::Volcanic,
        Biome::Exotic,
    ];

    /// Uniformly random biome.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Display label shown in the planet HUD.
    pub fn label(&self) -> &'static str {
        match self {
            Biome::Lush => "Lush",
            Biome::Toxic => "Toxic",
            Biome::Radioactive => "Radioactive",
            Biome::Desert => "Desert",
            Biome::Frozen => "Frozen",
            Biome::Volcanic => "Volcanic",
            Biome::Exotic => "Exotic",
        }
    }

    /// One-line flavor text for scanners and landing screens.
    pub fn description(&self) -> &'static str {
        match self {
            Biome::Lush => "Temperate world teeming with vegetation",
            Biome::Toxic => "Corrosive air; sealed suit required",
            Biome::Radioactive => "High background radiation across the surface",
            Biome::Desert => "Dry, wind-scoured plains and dunes",
            Biome::Frozen => "Sub-zero surface locked in ice",
            Biome::Volcanic => "Active vents and rivers of lava",
            Biome::Exotic => "Anomalous readings defy classification",
        }
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
