//! Galaxy generation: star systems strung along spiral arms.

use crate::star_system::StarSystem;
use engine_core::DVec2;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::f64::consts::TAU;

/// Tunables for spiral-arm placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Number of spiral arms.
    pub arms: usize,
    /// Radius of the first system on each arm.
    pub base_radius: f64,
    /// Radius added per system along an arm.
    pub radius_step: f64,
    /// Random radius added per system, [0, jitter).
    pub radius_jitter: f64,
    /// Candidates closer than this to an accepted system are dropped.
    pub min_spacing: f64,
    /// Systems closer than this are linked on the map.
    pub link_distance: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            arms: 6,
            base_radius: 2000.0,
            radius_step: 100.0,
            radius_jitter: 500.0,
            min_spacing: 800.0,
            link_distance: 800.0,
        }
    }
}

/// All star systems of a game session.
///
/// `systems[0]` is always the starting system. Selection is an index so the
/// collection can be replaced wholesale (e.g. on load) without dangling.
#[derive(Debug, Clone, PartialEq)]
pub struct Galaxy {
    systems: Vec<StarSystem>,
    selected: Option<usize>,
    params: LayoutParams,
}

impl Galaxy {
    /// Generate a galaxy around `start` with the reference layout, using the thread RNG.
    pub fn generate(start: StarSystem, target_count: usize) -> Self {
        Self::generate_with(&mut thread_rng(), start, target_count, LayoutParams::default())
    }

    /// Generate a galaxy of at most `target_count` systems.
    ///
    /// Each arm gets `target_count / arms` candidates. A candidate closer
    /// than `min_spacing` to any accepted system is dropped and not retried,
    /// so the result is usually smaller than requested; it always contains
    /// at least `start`.
    pub fn generate_with<R: Rng + ?Sized>(
        rng: &mut R,
        start: StarSystem,
        target_count: usize,
        params: LayoutParams,
    ) -> Self {
        let arms = params.arms.max(1);
        let per_arm = target_count / arms;

        let mut systems = Vec::with_capacity(target_count.max(1));
        systems.push(start);
        let mut rejected = 0usize;

        'arms: for arm in 0..arms {
            let arm_offset = arm as f64 / arms as f64 * TAU;

            for i in 0..per_arm {
                if systems.len() >= target_count {
                    break 'arms;
                }

                // Two full turns per arm.
                let angle = i as f64 / per_arm as f64 * TAU * 2.0 + arm_offset;
                let radius = params.base_radius
                    + i as f64 * params.radius_step
                    + rng.gen::<f64>() * params.radius_jitter;
                let position = DVec2::new(angle.cos(), angle.sin()) * radius;
                let candidate = StarSystem::generate(rng, position);

                let too_close = systems
                    .iter()
                    .any(|s| s.position.distance(position) < params.min_spacing);
                if too_close {
                    rejected += 1;
                } else {
                    systems.push(candidate);
                }
            }
        }

        log::debug!(
            "Galaxy layout: {} systems placed ({} requested, {} candidates rejected)",
            systems.len(),
            target_count,
            rejected
        );
        if systems.len() == 1 && target_count > 1 {
            log::warn!("Galaxy layout produced only the starting system");
        }

        Self {
            systems,
            selected: None,
            params,
        }
    }

    /// Rebuild a galaxy from previously generated systems without rolling anything.
    /// Returns `None` if `systems` is empty.
    pub fn from_systems(systems: Vec<StarSystem>, params: LayoutParams) -> Option<Self> {
        if systems.is_empty() {
            return None;
        }
        Some(Self {
            systems,
            selected: None,
            params,
        })
    }

    pub fn systems(&self) -> &[StarSystem] {
        &self.systems
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StarSystem> {
        self.systems.get(index)
    }

    /// The player's starting system.
    pub fn start(&self) -> &StarSystem {
        &self.systems[0]
    }

    /// Index of the first system called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.systems.iter().position(|s| s.name == name)
    }

    /// Index of `system`, matched on name and position; names alone are
    /// not unique. Falls back to the first system with the same name.
    pub fn locate(&self, system: &StarSystem) -> Option<usize> {
        self.systems
            .iter()
            .position(|s| s.name == system.name && s.position == system.position)
            .or_else(|| self.index_of(&system.name))
    }

    pub fn distance_between(&self, a: usize, b: usize) -> Option<f64> {
        Some(self.get(a)?.distance_to(self.get(b)?))
    }

    /// Find the system nearest to a world position. Returns (index, distance).
    pub fn nearest_system(&self, pos: DVec2) -> Option<(usize, f64)> {
        self.systems
            .iter()
            .enumerate()
            .map(|(i, s)| (i, s.position.distance(pos)))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Change the selection. An out-of-range index clears it.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.systems.len());
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_system(&self) -> Option<&StarSystem> {
        self.selected.and_then(|i| self.systems.get(i))
    }

    pub fn mark_visited(&mut self, index: usize) {
        if let Some(s) = self.systems.get_mut(index) {
            s.visited = true;
        }
    }

    /// Names of every visited system, in galaxy order.
    pub fn visited_names(&self) -> Vec<String> {
        self.systems
            .iter()
            .filter(|s| s.visited)
            .map(|s| s.name.clone())
            .collect()
    }

    fn linked(&self, a: usize, b: usize) -> bool {
        a != b && self.systems[a].distance_to(&self.systems[b]) < self.params.link_distance
    }

    /// All linked pairs `(a, b)` with `a < b`.
    pub fn links(&self) -> Vec<(usize, usize)> {
        let n = self.systems.len();
        let mut out = Vec::new();
        for a in 0..n {
            for b in (a + 1)..n {
                if self.linked(a, b) {
                    out.push((a, b));
                }
            }
        }
        out
    }

    /// Systems directly linked to `index`.
    pub fn neighbors(&self, index: usize) -> Vec<usize> {
        if index >= self.systems.len() {
            return Vec::new();
        }
        (0..self.systems.len())
            .filter(|&other| self.linked(index, other))
            .collect()
    }

    /// Every system reachable from `index` through links, `index` included,
    /// in breadth-first order. Isolated systems reach only themselves.
    pub fn reachable_from(&self, index: usize) -> Vec<usize> {
        if index >= self.systems.len() {
            return Vec::new();
        }
        let mut seen = vec![false; self.systems.len()];
        let mut order = Vec::new();
        let mut queue = VecDeque::from([index]);
        seen[index] = true;
        while let Some(current) = queue.pop_front() {
            order.push(current);
            for next in self.neighbors(current) {
                if !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_galaxy(seed: u64, target: usize, params: LayoutParams) -> Galaxy {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = StarSystem::generate_start(&mut rng);
        Galaxy::generate_with(&mut rng, start, target, params)
    }

    fn assert_spacing(g: &Galaxy, min: f64) {
        let s = g.systems();
        for a in 0..s.len() {
            for b in (a + 1)..s.len() {
                let d = s[a].distance_to(&s[b]);
                assert!(d >= min, "systems {} and {} only {} apart", a, b, d);
            }
        }
    }

    #[test]
    fn reference_galaxy_respects_spacing_and_count() {
        for seed in [1, 2, 3, 12345] {
            let g = seeded_galaxy(seed, 300, LayoutParams::default());
            assert!(g.len() >= 1 && g.len() <= 300);
            assert_spacing(&g, 800.0);
        }
    }

    #[test]
    fn start_system_is_first() {
        let mut rng = StdRng::seed_from_u64(55);
        let start = StarSystem::generate_start(&mut rng);
        let g = Galaxy::generate_with(&mut rng, start.clone(), 300, LayoutParams::default());
        assert_eq!(g.start(), &start);
        assert_eq!(g.systems()[0], start);

        let fresh = Galaxy::generate(start.clone(), 120);
        assert_eq!(fresh.start(), &start);
    }

    #[test]
    fn tiny_target_gives_only_start() {
        let g = seeded_galaxy(9, 5, LayoutParams::default());
        assert_eq!(g.len(), 1);
        let g = seeded_galaxy(9, 0, LayoutParams::default());
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn huge_spacing_degenerates_to_start() {
        let params = LayoutParams {
            min_spacing: 1.0e6,
            ..Default::default()
        };
        let g = seeded_galaxy(4, 300, params);
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn never_exceeds_target() {
        let params = LayoutParams {
            min_spacing: 1.0,
            ..Default::default()
        };
        let g = seeded_galaxy(6, 60, params);
        assert_eq!(g.len(), 60);
        assert_spacing(&g, 1.0);
    }

    #[test]
    fn systems_lie_on_arm_radii() {
        let params = LayoutParams::default();
        let g = seeded_galaxy(21, 300, params);
        let max_r = params.base_radius + 49.0 * params.radius_step + params.radius_jitter;
        for s in &g.systems()[1..] {
            let r = s.position.length();
            assert!(r >= params.base_radius && r < max_r, "radius {}", r);
            assert!(!s.visited);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = seeded_galaxy(777, 300, LayoutParams::default());
        let b = seeded_galaxy(777, 300, LayoutParams::default());
        assert_eq!(a, b);
    }

    #[test]
    fn links_follow_link_distance() {
        let params = LayoutParams {
            link_distance: 1500.0,
            ..Default::default()
        };
        let g = seeded_galaxy(8, 300, params);
        for (a, b) in g.links() {
            assert!(a < b);
            assert!(g.distance_between(a, b).unwrap_or(f64::MAX) < 1500.0);
        }
        // With the reference parameters links and spacing share a threshold,
        // so spacing leaves nothing close enough to link.
        let reference = seeded_galaxy(8, 300, LayoutParams::default());
        assert!(reference.links().is_empty());
        assert_eq!(reference.reachable_from(0), vec![0]);
    }

    #[test]
    fn reachable_walks_links() {
        let sys = |name: &str, x: f64| StarSystem {
            name: name.to_string(),
            position: DVec2::new(x, 0.0),
            color: engine_core::Hsla::opaque(0.0, 0.7, 0.6),
            visited: false,
        };
        let params = LayoutParams {
            link_distance: 100.0,
            ..Default::default()
        };
        let g = Galaxy::from_systems(
            vec![sys("a", 0.0), sys("b", 90.0), sys("c", 180.0), sys("d", 1000.0)],
            params,
        )
        .expect("non-empty");
        assert_eq!(g.neighbors(1), vec![0, 2]);
        assert_eq!(g.reachable_from(0), vec![0, 1, 2]);
        assert_eq!(g.reachable_from(3), vec![3]);
        assert!(g.reachable_from(10).is_empty());
    }

    #[test]
    fn selection_is_index_based() {
        let mut g = seeded_galaxy(3, 300, LayoutParams::default());
        assert_eq!(g.selected(), None);
        g.select(Some(0));
        assert_eq!(g.selected_system().map(|s| s.name.clone()), Some(g.start().name.clone()));
        g.select(Some(g.len() + 5));
        assert_eq!(g.selected(), None);
    }

    #[test]
    fn visited_names_follow_marks() {
        let mut g = seeded_galaxy(12, 300, LayoutParams::default());
        assert!(g.visited_names().is_empty());
        g.mark_visited(0);
        assert_eq!(g.visited_names(), vec![g.start().name.clone()]);
        assert_eq!(g.index_of(&g.start().name.clone()), Some(0));
    }

    #[test]
    fn nearest_system_finds_start_at_its_position() {
        let g = seeded_galaxy(2, 300, LayoutParams::default());
        let (idx, dist) = g.nearest_system(g.start().position).expect("non-empty");
        assert_eq!(idx, 0);
        assert_eq!(dist, 0.0);
        assert!(Galaxy::from_systems(Vec::new(), LayoutParams::default()).is_none());
    }
}
