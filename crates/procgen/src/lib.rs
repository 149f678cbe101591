//! Procedural generation for galaxies, star systems, planets and terrain.

pub mod biome;
pub mod galaxy;
pub mod names;
pub mod planet;
pub mod snapshot;
pub mod star_system;
pub mod terrain;

pub use biome::*;
pub use galaxy::*;
pub use planet::*;
pub use snapshot::*;
pub use star_system::*;
pub use terrain::{height_at, TerrainConfig, TERRAIN_WIDTH};
