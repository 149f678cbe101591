//! Saved-game shape and rehydration.
//!
//! A snapshot carries everything generated so far, so restoring it never
//! re-rolls names, positions or terrain. Where the snapshot is stored is the
//! caller's business; this module only converts to and from ron text.

use crate::galaxy::{Galaxy, LayoutParams};
use crate::star_system::{OrbitalBody, StarSystem};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while decoding or validating a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot contains no star systems")]
    NoSystems,
    #[error("current system {0:?} is not in the snapshot's system list")]
    UnknownCurrentSystem(String),
    #[error("failed to parse snapshot: {0}")]
    Decode(#[from] ron::error::SpannedError),
    #[error("failed to write snapshot: {0}")]
    Encode(#[from] ron::Error),
}

/// Ship placement within the current system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipPose {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

/// Everything needed to resume a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub ship: ShipPose,
    pub current_system: StarSystem,
    #[serde(default)]
    pub visited_systems: Vec<String>,
    #[serde(default)]
    pub systems: Vec<StarSystem>,
    /// Planets of the current system as last generated.
    #[serde(default)]
    pub planets: Option<Vec<OrbitalBody>>,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub timestamp: u64,
}

/// A snapshot turned back into live state.
#[derive(Debug, Clone)]
pub struct Restored {
    pub galaxy: Galaxy,
    /// Index of the current system in `galaxy`.
    pub current: usize,
    pub ship: ShipPose,
    /// `None` when the snapshot had no planets; the caller generates fresh ones.
    pub planets: Option<Vec<OrbitalBody>>,
}

impl GameSnapshot {
    /// Rebuild the galaxy exactly as saved. Visited names that match no
    /// system are ignored.
    pub fn rehydrate(self, params: LayoutParams) -> Result<Restored, SnapshotError> {
        let mut galaxy =
            Galaxy::from_systems(self.systems, params).ok_or(SnapshotError::NoSystems)?;
        let current = galaxy
            .locate(&self.current_system)
            .ok_or_else(|| SnapshotError::UnknownCurrentSystem(self.current_system.name.clone()))?;

        for name in &self.visited_systems {
            match galaxy.index_of(name) {
                Some(i) => galaxy.mark_visited(i),
                None => log::debug!("Ignoring unknown visited system {:?}", name),
            }
        }

        Ok(Restored {
            galaxy,
            current,
            ship: self.ship,
            planets: self.planets,
        })
    }

    /// Serialize to pretty ron.
    pub fn encode(&self) -> Result<String, SnapshotError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Parse from ron text.
    pub fn decode(text: &str) -> Result<Self, SnapshotError> {
        Ok(ron::from_str(text)?)
    }
}
