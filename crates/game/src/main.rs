//! Headless driver: generates (or resumes) a session and walks through one
//! map selection, hyperjump and planet survey, logging what it finds.
//!
//! Usage: `starfarer [SAVE.ron]`. With a save file the session resumes from
//! it; a missing or corrupt save starts a new game instead.

use anyhow::Result;
use game::{GameConfig, MapCommand, MapEvent, Session};
use procgen::TERRAIN_WIDTH;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Simulation ticks run on the surveyed planet.
const SURVEY_TICKS: usize = 120;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("╔════════════════════════════════════════════╗");
    println!("║                 STARFARER                  ║");
    println!("║   procedural galaxy / planet generator     ║");
    println!("╚════════════════════════════════════════════╝");

    let config = GameConfig::load();
    let mut rng = rand::thread_rng();

    let mut session = match std::env::args().nth(1) {
        Some(path) => Session::load_file_or_generate(Path::new(&path), &config, &mut rng),
        None => Session::new(&config, &mut rng),
    };

    report_system(&session);

    // Pick the nearest other system on the map and jump there.
    let current = session.current_system().position;
    let target = session
        .galaxy()
        .systems()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != session.current_index())
        .min_by(|a, b| {
            a.1.position
                .distance(current)
                .partial_cmp(&b.1.position.distance(current))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, s)| (i, session.map().screen_position(s)));

    match target {
        Some((index, screen)) => {
            if let MapEvent::Selected(Some(hit)) = session.apply(MapCommand::Click(screen)) {
                log::info!(
                    "Selected {} at {:.0} ly",
                    session.galaxy().systems()[hit].name,
                    session.selected_distance().unwrap_or_default()
                );
            }
            if session.hyperjump_to_selected(&mut rng).is_none() {
                log::warn!("Could not jump to system {}", index);
            }
            report_system(&session);
        }
        None => log::warn!("Galaxy has no other systems to visit"),
    }

    survey_first_planet(&mut session);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let save = session.snapshot(timestamp).encode()?;
    log::info!("Snapshot ready ({} bytes)", save.len());

    Ok(())
}

fn report_system(session: &Session) {
    let system = session.current_system();
    log::info!(
        "System: {} at ({:.0}, {:.0}), {} links",
        system.name,
        system.position.x,
        system.position.y,
        session.galaxy().neighbors(session.current_index()).len()
    );
    for body in session.planets() {
        let p = &body.planet;
        let resources: Vec<String> = p.resources.iter().map(|r| r.to_string()).collect();
        log::info!(
            "  {} | {} | {}°C | orbit {:.0} | {}",
            p.name,
            p.biome,
            p.temperature,
            body.orbital_radius(),
            resources.join(", ")
        );
    }
}

fn survey_first_planet(session: &mut Session) {
    let Some(body) = session.planets_mut().first_mut() else {
        return;
    };
    for _ in 0..SURVEY_TICKS {
        body.spin();
        body.planet.update_fauna(TERRAIN_WIDTH as f32);
    }
    let p = &body.planet;
    log::info!("Surveyed {}: {}", p.name, p.biome.description());
    for animal in &p.animals {
        log::info!(
            "  {} at x={:.0} (ground {:.0})",
            animal.kind.label(),
            animal.x,
            p.surface_height(animal.x)
        );
    }
}
