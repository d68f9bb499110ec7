//! The live set of plants and the current season.
//!
//! [`SceneState`] is owned by whichever frame loop drives it; nothing in
//! here touches a window, so whole scenes can be stepped in tests with
//! fixed seeds.

use std::collections::VecDeque;

use glam::Vec2;

use crate::{
    config::SceneConfig,
    plant::Plant,
    season::{self, Palette, SEASON_PRESETS},
    seed::{self, SeedSource},
    turtle::{DrawCommand, SegmentStyle},
};

/// Clicks above this line land on the help overlay.
pub const HELP_BAND_HEIGHT: f32 = 70.0;
/// Clicks this close to the ground are ignored.
pub const GROUND_CLICK_MARGIN: f32 = 20.0;
/// Seed stride between the plants of one initial population.
pub const POPULATION_SEED_STRIDE: u64 = 12_345;

#[derive(Debug)]
pub struct SceneState {
    plants: VecDeque<Plant>,
    season: f32,
    config: SceneConfig,
}

impl SceneState {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            plants: VecDeque::with_capacity(config.max_plants + 1),
            season: config.initial_season.clamp(0.0, 1.0),
            config,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Live plants, oldest first.
    pub fn plants(&self) -> &VecDeque<Plant> {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn fully_grown(&self) -> usize {
        self.plants.iter().filter(|p| p.is_fully_grown()).count()
    }

    /// Adds a plant and evicts the oldest ones beyond `max_plants`.
    ///
    /// ### Parameters
    /// - `pos` - Root position in canvas space.
    /// - `seed` - Seed for the new plant.
    ///
    /// ### Returns
    /// The evicted plants, oldest first; usually empty.
    pub fn plant(&mut self, pos: Vec2, seed: u64) -> Vec<Plant> {
        self.plants
            .push_back(Plant::with_speed(pos, seed, self.config.growth_speed));

        let mut evicted = Vec::new();
        while self.plants.len() > self.config.max_plants {
            if let Some(old) = self.plants.pop_front() {
                log::debug!("evicted plant seed={} (cap {})", old.seed(), self.config.max_plants);
                evicted.push(old);
            }
        }
        evicted
    }

    /// Y coordinate where plants are rooted.
    pub fn ground_level(&self, canvas: Vec2) -> f32 {
        canvas.y - self.config.ground_height
    }

    /// Whether a click at height `y` may plant: below the help overlay and
    /// clear of the ground.
    pub fn accepts_click(&self, y: f32, canvas_height: f32) -> bool {
        y > HELP_BAND_HEIGHT && y < canvas_height - self.config.ground_height - GROUND_CLICK_MARGIN
    }

    /// Plants a new flora below a click, rooted on the ground line.
    ///
    /// ### Parameters
    /// - `click` - Click position in canvas space.
    /// - `canvas` - Canvas size.
    /// - `seeds` - Source of the base seed, mixed with the click position.
    ///
    /// ### Returns
    /// `true` if the click was accepted and a plant was added.
    pub fn plant_at_click(
        &mut self,
        click: Vec2,
        canvas: Vec2,
        seeds: &mut impl SeedSource,
    ) -> bool {
        if !self.accepts_click(click.y, canvas.y) {
            return false;
        }
        let seed = seed::click_seed(seeds.next_seed(), click);
        let root = Vec2::new(click.x, self.ground_level(canvas));
        self.plant(root, seed);
        true
    }

    /// Adds the initial population, spread evenly across the canvas width.
    pub fn populate(&mut self, canvas: Vec2, seeds: &mut impl SeedSource) {
        let base = seeds.next_seed();
        let y = self.ground_level(canvas);
        for i in 0..self.config.initial_plants {
            let x = canvas.x * (0.15 + i as f32 * 0.175);
            let seed = base.wrapping_add(i as u64 * POPULATION_SEED_STRIDE);
            self.plant(Vec2::new(x, y), seed);
        }
    }

    pub fn clear(&mut self) {
        log::info!("cleared {} plants", self.plants.len());
        self.plants.clear();
    }

    pub fn reset(&mut self, canvas: Vec2, seeds: &mut impl SeedSource) {
        self.plants.clear();
        self.populate(canvas, seeds);
        log::info!("scene reset with {} plants", self.plants.len());
    }

    pub fn season(&self) -> f32 {
        self.season
    }

    pub fn set_season(&mut self, t: f32) {
        self.season = t.clamp(0.0, 1.0);
    }

    /// Jumps to one of [`SEASON_PRESETS`]; returns `false` for an unknown index.
    pub fn apply_preset(&mut self, index: usize) -> bool {
        match SEASON_PRESETS.get(index) {
            Some(&t) => {
                self.set_season(t);
                true
            }
            None => false,
        }
    }

    pub fn palette(&self) -> Palette {
        season::colors(self.season)
    }

    pub fn season_name(&self) -> &'static str {
        season::season_name(self.season)
    }

    /// Grows every plant by one tick.
    pub fn tick(&mut self) {
        for plant in &mut self.plants {
            plant.grow();
        }
    }

    /// Draw commands of all plants in creation order, colored by the
    /// current season.
    pub fn render(&self) -> Vec<DrawCommand> {
        self.render_with(&self.palette())
    }

    pub fn render_with<S: SegmentStyle + ?Sized>(&self, style: &S) -> Vec<DrawCommand> {
        let mut out = Vec::new();
        for plant in &self.plants {
            plant.render_into(style, &mut out);
        }
        out
    }

    /// One animation frame: grow everything, then render everything.
    pub fn frame(&mut self) -> Vec<DrawCommand> {
        self.tick();
        self.render()
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}
