//! Game configuration (canvas, galaxy layout, map). Loaded from config.ron at startup.

use engine_core::DEFAULT_HIT_RADIUS;
use procgen::LayoutParams;
use serde::{Deserialize, Serialize};

/// Persistent game settings. Loaded from `config.ron` in the current directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Canvas width in pixels; the galaxy map starts centered on it.
    #[serde(default = "default_canvas_width")]
    pub canvas_width: u32,
    /// Canvas height in pixels.
    #[serde(default = "default_canvas_height")]
    pub canvas_height: u32,
    /// Systems requested from the galaxy generator (fewer may be placed).
    #[serde(default = "default_system_count")]
    pub system_count: usize,
    #[serde(default = "default_spiral_arms")]
    pub spiral_arms: usize,
    /// Minimum distance between two systems.
    #[serde(default = "default_min_spacing")]
    pub min_spacing: f64,
    /// Systems closer than this are linked on the map.
    #[serde(default = "default_min_spacing")]
    pub link_distance: f64,
    /// Zoom of the galaxy map when first opened.
    #[serde(default = "default_map_zoom")]
    pub map_zoom: f64,
    /// Selection radius in screen pixels.
    #[serde(default = "default_hit_radius")]
    pub hit_radius: f64,
}

fn default_canvas_width() -> u32 {
    1280
}
fn default_canvas_height() -> u32 {
    720
}
fn default_system_count() -> usize {
    300
}
fn default_spiral_arms() -> usize {
    6
}
fn default_min_spacing() -> f64 {
    800.0
}
fn default_map_zoom() -> f64 {
    0.25
}
fn default_hit_radius() -> f64 {
    DEFAULT_HIT_RADIUS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            system_count: default_system_count(),
            spiral_arms: default_spiral_arms(),
            min_spacing: default_min_spacing(),
            link_distance: default_min_spacing(),
            map_zoom: default_map_zoom(),
            hit_radius: default_hit_radius(),
        }
    }
}

impl GameConfig {
    /// Load config from `config.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match Self::parse(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Parse config text; missing fields take their defaults.
    pub fn parse(data: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(data)
    }

    /// Galaxy layout derived from these settings; radii keep their reference values.
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            arms: self.spiral_arms,
            min_spacing: self.min_spacing,
            link_distance: self.link_distance,
            ..Default::default()
        }
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from(".")).join("config.ron")
}
