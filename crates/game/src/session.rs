//! A play session: the galaxy map, the system the player is in, and its planets.

use crate::config::GameConfig;
use crate::starmap::{MapCommand, MapEvent, StarMap};
use engine_core::{SpatialPicker, Viewport};
use procgen::{
    populate_system, Galaxy, GameSnapshot, OrbitalBody, ShipPose, SnapshotError, StarSystem,
};
use rand::Rng;
use std::path::Path;

/// Live game state that the generation layer feeds.
#[derive(Debug, Clone)]
pub struct Session {
    map: StarMap,
    /// Index of the current system in the galaxy.
    current: usize,
    /// Planets of the current system; regenerated on every arrival.
    planets: Vec<OrbitalBody>,
    ship: ShipPose,
}

impl Session {
    /// Fresh game: new start system, galaxy and planets.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let start = StarSystem::generate_start(rng);
        let mut galaxy =
            Galaxy::generate_with(rng, start, config.system_count, config.layout_params());
        galaxy.mark_visited(0);
        let planets = populate_system(rng);

        log::info!(
            "New game in {} ({} systems, {} planets)",
            galaxy.start().name,
            galaxy.len(),
            planets.len()
        );

        Self {
            map: Self::build_map(config, galaxy),
            current: 0,
            planets,
            ship: ShipPose::default(),
        }
    }

    /// Resume from a snapshot. Saved planets are kept; if the snapshot has
    /// none, the current system is populated fresh.
    pub fn restore<R: Rng + ?Sized>(
        snapshot: GameSnapshot,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<Self, SnapshotError> {
        let restored = snapshot.rehydrate(config.layout_params())?;
        let planets = restored.planets.unwrap_or_else(|| populate_system(rng));
        log::info!(
            "Restored game in {} ({} systems)",
            restored.galaxy.systems()[restored.current].name,
            restored.galaxy.len()
        );
        Ok(Self {
            map: Self::build_map(config, restored.galaxy),
            current: restored.current,
            planets,
            ship: restored.ship,
        })
    }

    /// Resume from a snapshot if it is usable, otherwise start a new game.
    pub fn restore_or_generate<R: Rng + ?Sized>(
        snapshot: Option<GameSnapshot>,
        config: &GameConfig,
        rng: &mut R,
    ) -> Self {
        match snapshot.map(|s| Self::restore(s, config, rng)) {
            Some(Ok(session)) => session,
            Some(Err(e)) => {
                log::warn!("Could not restore saved game: {}, starting a new one", e);
                Self::new(config, rng)
            }
            None => Self::new(config, rng),
        }
    }

    /// Like [`Self::restore_or_generate`] for snapshot text.
    pub fn load_or_generate<R: Rng + ?Sized>(text: &str, config: &GameConfig, rng: &mut R) -> Self {
        match GameSnapshot::decode(text) {
            Ok(snapshot) => Self::restore_or_generate(Some(snapshot), config, rng),
            Err(e) => {
                log::warn!("Could not read saved game: {}, starting a new one", e);
                Self::new(config, rng)
            }
        }
    }

    /// Like [`Self::load_or_generate`] for a save file on disk. A file that
    /// cannot be read also starts a new game.
    pub fn load_file_or_generate<R: Rng + ?Sized>(
        path: &Path,
        config: &GameConfig,
        rng: &mut R,
    ) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::load_or_generate(&text, config, rng),
            Err(e) => {
                log::warn!("Could not open saved game {:?}: {}, starting a new one", path, e);
                Self::new(config, rng)
            }
        }
    }

    fn build_map(config: &GameConfig, galaxy: Galaxy) -> StarMap {
        StarMap::new(
            galaxy,
            Viewport::centered(config.canvas_width, config.canvas_height, config.map_zoom),
            SpatialPicker::new(config.hit_radius),
        )
    }

    pub fn map(&self) -> &StarMap {
        &self.map
    }

    pub fn galaxy(&self) -> &Galaxy {
        self.map.galaxy()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_system(&self) -> &StarSystem {
        &self.galaxy().systems()[self.current]
    }

    pub fn planets(&self) -> &[OrbitalBody] {
        &self.planets
    }

    pub fn planets_mut(&mut self) -> &mut [OrbitalBody] {
        &mut self.planets
    }

    pub fn ship(&self) -> ShipPose {
        self.ship
    }

    pub fn set_ship(&mut self, ship: ShipPose) {
        self.ship = ship;
    }

    /// Forward a map gesture.
    pub fn apply(&mut self, command: MapCommand) -> MapEvent {
        self.map.apply(command)
    }

    /// Distance from the current system to the selected one, unless they are the same.
    pub fn selected_distance(&self) -> Option<f64> {
        let selected = self.galaxy().selected()?;
        if selected == self.current {
            return None;
        }
        self.galaxy().distance_between(self.current, selected)
    }

    /// Jump to the selected system. Returns the new current index, or `None`
    /// if nothing (or the current system) is selected.
    pub fn hyperjump_to_selected<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        let target = self.galaxy().selected().filter(|&i| i != self.current)?;
        self.current = target;
        self.map.galaxy_mut().mark_visited(target);
        self.planets = populate_system(rng);
        log::info!(
            "Hyperjump to {} ({} planets)",
            self.current_system().name,
            self.planets.len()
        );
        Some(target)
    }

    /// Capture the session for saving.
    pub fn snapshot(&self, timestamp: u64) -> GameSnapshot {
        GameSnapshot {
            ship: self.ship,
            current_system: self.current_system().clone(),
            visited_systems: self.galaxy().visited_names(),
            systems: self.galaxy().systems().to_vec(),
            planets: Some(self.planets.clone()),
            timestamp,
        }
    }
}
