//! Random names for star systems and planets.

use rand::prelude::*;

/// First word of a system name.
pub const SYSTEM_PREFIXES: [&str; 10] = [
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta", "Iota", "Kappa",
];

/// Second word of a system name.
pub const SYSTEM_SUFFIXES: [&str; 9] = [
    "Prime", "Major", "Minor", "Centauri", "Proxima", "Ceti", "Draconis", "Eridani", "Orionis",
];

/// Catalogue numbers are drawn from `0..SYSTEM_NUMBER_LIMIT`.
pub const SYSTEM_NUMBER_LIMIT: u32 = 999;

pub const PLANET_PREFIXES: [&str; 30] = [
    "Nova", "Alpha", "Beta", "Gamma", "Delta",
    "Terra", "Kepler", "Atlas", "Helios", "Kronos",
    "Nexus", "Aether", "Nebula", "Cosmos", "Astro",
    "Proxima", "Stella", "Luna", "Pulsar", "Quasar",
    "Vega", "Sirius", "Rigel", "Antares", "Arcturus",
    "Zeta", "Omega", "Sigma", "Tau", "Epsilon",
];

pub const PLANET_SUFFIXES: [&str; 25] = [
    "Prime", "Minor", "Major", "IX", "V",
    "Ultima", "Proxima", "Zero", "Alpha", "Omega",
    "Genesis", "Exodus", "Zenith", "Nadir", "Core",
    "Centauri", "Perihelion", "Aphelion", "Equinox", "Solstice",
    "Haven", "Oasis", "Nexus", "Dawn", "Dusk",
];

/// Short designation appended to planet names: numerals, letters, Greek letters, digits.
pub const PLANET_TYPES: [&str; 20] = [
    "I", "II", "III", "IV", "V",
    "A", "B", "C", "D", "E",
    "α", "β", "γ", "δ", "ε",
    "1", "2", "3", "4", "5",
];

fn pick<R: Rng + ?Sized>(rng: &mut R, words: &[&'static str]) -> &'static str {
    words[rng.gen_range(0..words.len())]
}

/// System name like "Gamma Draconis 417".
pub fn system_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = pick(rng, &SYSTEM_PREFIXES);
    let suffix = pick(rng, &SYSTEM_SUFFIXES);
    let number = rng.gen_range(0..SYSTEM_NUMBER_LIMIT);
    format!("{} {} {}", prefix, suffix, number)
}

/// Planet name like "Kepler Haven-β".
pub fn planet_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = pick(rng, &PLANET_PREFIXES);
    let suffix = pick(rng, &PLANET_SUFFIXES);
    let kind = pick(rng, &PLANET_TYPES);
    format!("{} {}-{}", prefix, suffix, kind)
}

/// System name from the thread RNG.
pub fn random_system_name() -> String {
    system_name(&mut thread_rng())
}

/// Planet name from the thread RNG.
pub fn random_planet_name() -> String {
    planet_name(&mut thread_rng())
}
