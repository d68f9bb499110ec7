use crate::types::Seed;

const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;
const MODULUS_MASK: u64 = 0x7fff_ffff;

/// Seedable linear-congruential stream used for grammar selection.
///
/// The recurrence is `state = (state * 1103515245 + 12345) mod 2^31`
/// and each draw is `(state mod 1000) / 1000`. Only the low 31 bits of
/// the state influence the next value, so the product is computed on
/// the masked state and never overflows `u64`.
#[derive(Clone, Debug)]
pub struct LcgStream {
    state: u64,
}

impl LcgStream {
    pub fn new(seed: Seed) -> Self {
        Self { state: seed }
    }

    /// Current internal state; equal to the seed before the first draw.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advances the recurrence once and returns a value in `[0, 1)`.
    ///
    /// The output is quantised to multiples of `0.001`.
    pub fn next_unit(&mut self) -> f32 {
        self.state = ((self.state & MODULUS_MASK) * MULTIPLIER + INCREMENT) & MODULUS_MASK;
        (self.state % 1000) as f32 / 1000.0
    }
}
