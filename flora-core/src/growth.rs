/// Progress added per tick unless configured otherwise.
pub const DEFAULT_GROWTH_SPEED: f64 = 0.02;

/// Progress within this distance of 1 counts as complete, so that
/// accumulated float error cannot add an extra tick.
const COMPLETION_EPSILON: f64 = 1e-9;

/// Monotonic reveal progress of one plant.
///
/// Starts at `0` and growing; each [`GrowthState::tick`] adds `speed`
/// until progress reaches `1`, after which the state is terminal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthState {
    progress: f64,
    speed: f64,
    growing: bool,
}

impl GrowthState {
    pub fn new(speed: f64) -> Self {
        Self {
            progress: 0.0,
            speed,
            growing: true,
        }
    }

    pub fn tick(&mut self) {
        if !self.growing {
            return;
        }
        self.progress += self.speed;
        if self.progress >= 1.0 - COMPLETION_EPSILON {
            self.progress = 1.0;
            self.growing = false;
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_growing(&self) -> bool {
        self.growing
    }

    /// Number of leading symbols revealed: `floor(total * progress)`.
    pub fn reveal_count(&self, total: usize) -> usize {
        ((total as f64 * self.progress).floor() as usize).min(total)
    }
}

impl Default for GrowthState {
    fn default() -> Self {
        Self::new(DEFAULT_GROWTH_SPEED)
    }
}
