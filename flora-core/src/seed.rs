//! Injectable seed sources.
//!
//! The viewer seeds plants from the wall clock; tests inject fixed seeds
//! so that whole scenes are reproducible.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;
use rand::Rng;

use crate::types::Seed;

pub trait SeedSource {
    fn next_seed(&mut self) -> Seed;
}

/// Milliseconds since the UNIX epoch.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClockSeed;

impl SeedSource for ClockSeed {
    fn next_seed(&mut self) -> Seed {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as Seed)
            .unwrap_or_default()
    }
}

/// Cycles through a fixed list of seeds.
#[derive(Clone, Debug)]
pub struct FixedSeeds {
    seeds: Vec<Seed>,
    next: usize,
}

impl FixedSeeds {
    /// An empty list behaves like a single seed of `0`.
    pub fn new(seeds: Vec<Seed>) -> Self {
        Self {
            seeds,
            next: 0,
        }
    }
}

impl SeedSource for FixedSeeds {
    fn next_seed(&mut self) -> Seed {
        if self.seeds.is_empty() {
            return 0;
        }
        let seed = self.seeds[self.next % self.seeds.len()];
        self.next += 1;
        seed
    }
}

/// Seeds drawn from any [`rand::Rng`].
#[derive(Clone, Debug)]
pub struct RngSeeds<R: Rng>(pub R);

impl<R: Rng> SeedSource for RngSeeds<R> {
    fn next_seed(&mut self) -> Seed {
        self.0.random()
    }
}

/// Seed for a plant planted by a click at `pos`: `base + x * 1000 + y`.
///
/// Coordinates are truncated to non-negative integers.
pub fn click_seed(base: Seed, pos: Vec2) -> Seed {
    let x = pos.x.max(0.0) as Seed;
    let y = pos.y.max(0.0) as Seed;
    base.wrapping_add(x.wrapping_mul(1000)).wrapping_add(y)
}
