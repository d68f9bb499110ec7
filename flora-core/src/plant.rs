//! A single seeded plant: grammar expansion, growth and placement.

use glam::Vec2;

use crate::{
    growth::{DEFAULT_GROWTH_SPEED, GrowthState},
    lsystem::{self, Expansion},
    random::LcgStream,
    turtle::{DepthScan, DrawCommand, SegmentStyle, Turtle},
    types::Seed,
};

/// Rewrite passes for `seed`, in `3..=5`.
///
/// `floor(((seed * 13) mod 1000) / 1000 * 3) + 3`, evaluated exactly for
/// any `u64` seed.
pub fn derive_iterations(seed: Seed) -> u32 {
    let m = (seed % 1000) * 13 % 1000;
    (m * 3 / 1000) as u32 + 3
}

/// Length of a depth-zero segment for `seed`, in `[3, 7)`.
pub fn derive_base_length(seed: Seed) -> f32 {
    let m = (seed % 1000) * 17 % 1000;
    3.0 + m as f32 / 1000.0 * 4.0
}

#[derive(Clone, Debug)]
pub struct Plant {
    pos: Vec2,
    seed: Seed,
    base_length: f32,
    expansion: Expansion,
    total_symbols: usize,
    growth: GrowthState,
    depth: DepthScan,
}

impl Plant {
    pub fn new(pos: Vec2, seed: Seed) -> Self {
        Self::with_speed(pos, seed, DEFAULT_GROWTH_SPEED)
    }

    /// Builds a plant rooted at `pos` whose growth advances `speed` per tick.
    ///
    /// Grammar selection and mutation draw from an [`LcgStream`] seeded with
    /// `seed`; iteration count and base length are derived from `seed`
    /// directly and do not touch the stream.
    pub fn with_speed(pos: Vec2, seed: Seed, speed: f64) -> Self {
        let iterations = derive_iterations(seed);
        let base_length = derive_base_length(seed);
        let mut stream = LcgStream::new(seed);
        let expansion = lsystem::generate(&mut stream, iterations);
        let total_symbols = expansion.len();

        log::debug!(
            "planted {} at ({:.1}, {:.1}): seed={} angle={:.2} iterations={} symbols={}",
            expansion.name,
            pos.x,
            pos.y,
            seed,
            expansion.angle,
            iterations,
            total_symbols
        );

        Self {
            pos,
            seed,
            base_length,
            expansion,
            total_symbols,
            growth: GrowthState::new(speed),
            depth: DepthScan::new(),
        }
    }

    /// Advances growth by one tick and extends the depth scan to the new
    /// reveal count.
    pub fn grow(&mut self) {
        if !self.growth.is_growing() {
            return;
        }
        self.growth.tick();
        let reveal = self.reveal_count();
        self.depth.advance(&self.expansion.sentence, reveal);
    }

    /// Draw commands for the currently revealed prefix, in canvas space.
    pub fn render<S: SegmentStyle + ?Sized>(&self, style: &S) -> Vec<DrawCommand> {
        let mut out = Vec::new();
        self.render_into(style, &mut out);
        out
    }

    /// Appends the plant's draw commands to `out`, translated to its position.
    pub fn render_into<S: SegmentStyle + ?Sized>(&self, style: &S, out: &mut Vec<DrawCommand>) {
        let start = out.len();
        Turtle::new(self.expansion.angle, self.base_length).interpret(
            &self.expansion.sentence,
            self.reveal_count(),
            self.depth.max_depth(),
            self.seed,
            style,
            out,
        );
        for cmd in &mut out[start..] {
            *cmd = cmd.translated(self.pos);
        }
    }

    pub fn is_fully_grown(&self) -> bool {
        !self.growth.is_growing()
    }

    pub fn reveal_count(&self) -> usize {
        self.growth.reveal_count(self.total_symbols)
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    pub fn iterations(&self) -> u32 {
        self.expansion.iterations
    }

    pub fn base_length(&self) -> f32 {
        self.base_length
    }

    pub fn expansion(&self) -> &Expansion {
        &self.expansion
    }

    pub fn growth(&self) -> &GrowthState {
        &self.growth
    }

    pub fn total_symbols(&self) -> usize {
        self.total_symbols
    }
}
