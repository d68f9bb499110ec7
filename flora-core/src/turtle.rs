//! Turtle interpretation of expanded sentences.
//!
//! A sentence is walked symbol by symbol with a cursor holding position,
//! heading and branch depth. Rendering is two-pass over the revealed
//! prefix:
//!
//! 1. [`max_depth`] (or the incremental [`DepthScan`]) finds the deepest
//!    branch nesting reached so far, which sets the thickness scale.
//! 2. [`Turtle::interpret`] replays the prefix and emits one
//!    [`DrawCommand`] per `F`, styled by a [`SegmentStyle`].
//!
//! Coordinates follow a canvas whose Y axis points down, so the initial
//! heading of `-90°` grows the plant upwards.

use glam::Vec2;

use crate::{
    lsystem::Symbol,
    season::{Palette, Rgb},
    types::{Seed, SymbolIndex},
};

/// Initial heading in degrees; straight up on a Y-down canvas.
pub const START_HEADING: f32 = -90.0;
/// Each branch level shortens segments by this factor.
pub const LENGTH_DECAY: f32 = 0.85;
/// Thickness per remaining depth level.
pub const THICKNESS_SCALE: f32 = 0.8;
/// Segments never get thinner than this.
pub const MIN_THICKNESS: f32 = 1.0;

/// Cursor state, also the entry type of the branch stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurtleState {
    pub pos: Vec2,
    /// Heading in degrees.
    pub heading: f32,
    pub depth: u32,
}

impl TurtleState {
    pub fn origin() -> Self {
        Self {
            pos: Vec2::ZERO,
            heading: START_HEADING,
            depth: 0,
        }
    }
}

impl Default for TurtleState {
    fn default() -> Self {
        Self::origin()
    }
}

/// One colored line segment for the rendering sink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Rgb,
    pub thickness: f32,
}

impl DrawCommand {
    /// Same segment shifted by `offset`.
    pub fn translated(self, offset: Vec2) -> Self {
        Self {
            from: self.from + offset,
            to: self.to + offset,
            ..self
        }
    }
}

/// Color policy for drawn segments.
pub trait SegmentStyle {
    /// Color of the segment drawn by the `F` at `index`, at branch `depth`,
    /// for a plant with `seed`.
    fn color(&self, depth: u32, index: SymbolIndex, seed: Seed) -> Rgb;
}

/// Trunk up to depth 1, branch up to depth 3, leaves beyond.
///
/// The leaf is picked by `(seed + index) mod leaves.len()`, so a given
/// symbol keeps its color across frames. A palette without leaves falls
/// back to the branch color.
impl SegmentStyle for Palette {
    fn color(&self, depth: u32, index: SymbolIndex, seed: Seed) -> Rgb {
        match depth {
            0..=1 => self.trunk,
            2..=3 => self.branch,
            _ => leaf_index(seed, index, self.leaves.len())
                .map(|i| self.leaves[i])
                .unwrap_or(self.branch),
        }
    }
}

/// Leaf palette slot for the symbol at `index`; `None` when there are no leaves.
pub fn leaf_index(seed: Seed, index: SymbolIndex, leaf_count: usize) -> Option<usize> {
    if leaf_count == 0 {
        return None;
    }
    let n = leaf_count as u64;
    // (seed + index) mod n without overflowing for large seeds.
    Some(((seed % n + index as u64 % n) % n) as usize)
}

pub fn segment_length(base_length: f32, depth: u32) -> f32 {
    base_length * LENGTH_DECAY.powi(depth as i32)
}

/// Stroke width: thick near the trunk, thin toward the tips.
pub fn thickness(max_depth: u32, depth: u32) -> f32 {
    let levels = max_depth as f32 - depth as f32 + 1.0;
    (levels * THICKNESS_SCALE).max(MIN_THICKNESS)
}

/// Incremental deepest-nesting scan over a growing prefix.
///
/// Revealed prefixes only grow while a plant is alive, so each call to
/// [`DepthScan::advance`] only looks at the newly revealed symbols. A
/// `]` at depth zero is ignored, matching the no-op pop of the turtle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DepthScan {
    scanned: usize,
    byte_offset: usize,
    depth: u32,
    max: u32,
}

impl DepthScan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extends the scan to the first `reveal` symbols of `sentence`.
    ///
    /// A `reveal` smaller than what was already scanned restarts the scan,
    /// so the result is always exact for the requested prefix.
    ///
    /// ### Parameters
    /// - `sentence` - The sentence the scan belongs to.
    /// - `reveal` - Number of symbols revealed; clamped to the sentence length.
    ///
    /// ### Returns
    /// The deepest nesting reached within the prefix.
    pub fn advance(&mut self, sentence: &str, reveal: usize) -> u32 {
        if reveal < self.scanned {
            *self = Self::default();
        }

        let pending = reveal.saturating_sub(self.scanned);
        for c in sentence[self.byte_offset..].chars().take(pending) {
            match Symbol::from(c) {
                Symbol::Push => {
                    self.depth += 1;
                    self.max = self.max.max(self.depth);
                }
                Symbol::Pop => self.depth = self.depth.saturating_sub(1),
                _ => {}
            }
            self.scanned += 1;
            self.byte_offset += c.len_utf8();
        }
        self.max
    }

    pub fn max_depth(&self) -> u32 {
        self.max
    }

    /// Number of symbols covered so far.
    pub fn scanned(&self) -> usize {
        self.scanned
    }
}

/// Deepest branch nesting reached in the first `reveal` symbols.
pub fn max_depth(sentence: &str, reveal: usize) -> u32 {
    DepthScan::new().advance(sentence, reveal)
}

/// Stateful turtle cursor with its branch stack.
#[derive(Clone, Debug)]
pub struct Turtle {
    state: TurtleState,
    stack: Vec<TurtleState>,
    angle: f32,
    base_length: f32,
}

impl Turtle {
    /// Creates a turtle at the origin, heading up.
    ///
    /// ### Parameters
    /// - `angle` - Turn angle in degrees for `+` and `-`.
    /// - `base_length` - Length of an `F` at depth zero.
    pub fn new(angle: f32, base_length: f32) -> Self {
        Self {
            state: TurtleState::origin(),
            stack: Vec::with_capacity(16),
            angle,
            base_length,
        }
    }

    pub fn state(&self) -> TurtleState {
        self.state
    }

    /// Number of unmatched `[` seen so far.
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// Applies one symbol to the cursor.
    ///
    /// ### Returns
    /// The start and end points when the symbol drew a segment.
    pub fn step(&mut self, symbol: Symbol) -> Option<(Vec2, Vec2)> {
        match symbol {
            Symbol::Forward => {
                let len = segment_length(self.base_length, self.state.depth);
                let from = self.state.pos;
                let to = from + Vec2::from_angle(self.state.heading.to_radians()) * len;
                self.state.pos = to;
                Some((from, to))
            }
            Symbol::TurnLeft => {
                self.state.heading += self.angle;
                None
            }
            Symbol::TurnRight => {
                self.state.heading -= self.angle;
                None
            }
            Symbol::Push => {
                self.stack.push(self.state);
                self.state.depth += 1;
                None
            }
            Symbol::Pop => {
                if let Some(saved) = self.stack.pop() {
                    self.state = saved;
                }
                None
            }
            Symbol::NoOp => None,
        }
    }

    /// Walks the first `reveal` symbols of `sentence` and appends a styled
    /// [`DrawCommand`] to `out` for every drawn segment.
    ///
    /// `max_depth` must be the deepest nesting of the same prefix, as
    /// returned by [`max_depth`] or a [`DepthScan`].
    ///
    /// ### Parameters
    /// - `sentence` - Expanded sentence.
    /// - `reveal` - Number of leading symbols to interpret; clamped to the
    ///   sentence length.
    /// - `max_depth` - Deepest nesting of the revealed prefix.
    /// - `seed` - Plant seed, forwarded to the style.
    /// - `style` - Color policy.
    /// - `out` - Destination for draw commands.
    pub fn interpret<S: SegmentStyle + ?Sized>(
        &mut self,
        sentence: &str,
        reveal: usize,
        max_depth: u32,
        seed: Seed,
        style: &S,
        out: &mut Vec<DrawCommand>,
    ) {
        for (index, c) in sentence.chars().take(reveal).enumerate() {
            let depth = self.state.depth;
            if let Some((from, to)) = self.step(Symbol::from(c)) {
                out.push(DrawCommand {
                    from,
                    to,
                    color: style.color(depth, index, seed),
                    thickness: thickness(max_depth, depth),
                });
            }
        }
    }
}

/// Renders the first `reveal` symbols of `sentence` from a fresh turtle.
///
/// Computes the max depth of the prefix first, then interprets it.
pub fn render<S: SegmentStyle + ?Sized>(
    sentence: &str,
    angle: f32,
    base_length: f32,
    reveal: usize,
    seed: Seed,
    style: &S,
) -> Vec<DrawCommand> {
    let deepest = max_depth(sentence, reveal);
    let mut out = Vec::new();
    Turtle::new(angle, base_length).interpret(sentence, reveal, deepest, seed, style, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::Season;

    const EPS: f32 = 1e-4;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < EPS
    }

    fn palette() -> Palette {
        Season::Autumn.palette()
    }

    #[test]
    fn single_forward_goes_up() {
        let cmds = render("F", 25.0, 10.0, 1, 0, &palette());
        assert_eq!(cmds.len(), 1);
        assert!(approx(cmds[0].from, Vec2::ZERO));
        assert!(approx(cmds[0].to, Vec2::new(0.0, -10.0)));
    }

    #[test]
    fn turns_rotate_heading_by_angle() {
        let mut t = Turtle::new(30.0, 1.0);
        t.step(Symbol::TurnLeft);
        assert!((t.state().heading - (-60.0)).abs() < EPS);
        t.step(Symbol::TurnRight);
        t.step(Symbol::TurnRight);
        assert!((t.state().heading - (-120.0)).abs() < EPS);
    }

    #[test]
    fn branch_restores_position_and_shortens_segments() {
        let cmds = render("F[+F]F", 90.0, 10.0, 6, 0, &palette());
        assert_eq!(cmds.len(), 3);

        // Branch segment: depth 1, heading -90 + 90 = 0 (to the right).
        assert!(approx(cmds[1].from, Vec2::new(0.0, -10.0)));
        assert!(approx(cmds[1].to, Vec2::new(8.5, -10.0)));

        // After `]` we continue from the trunk tip, upwards, at full length.
        assert!(approx(cmds[2].from, Vec2::new(0.0, -10.0)));
        assert!(approx(cmds[2].to, Vec2::new(0.0, -20.0)));
    }

    #[test]
    fn well_formed_sentence_leaves_stack_empty() {
        let sentence = "F[+F[-F]F]F[-F[+F[F]]]F";
        let mut t = Turtle::new(25.0, 5.0);
        let mut out = Vec::new();
        let len = sentence.chars().count();
        t.interpret(sentence, len, max_depth(sentence, len), 1, &palette(), &mut out);
        assert_eq!(t.stack_depth(), 0);
        assert_eq!(out.len(), 9);
    }

    #[test]
    fn partial_reveal_leaves_unmatched_pushes_on_stack() {
        let sentence = "F[+F[-F]F]F";
        let mut t = Turtle::new(25.0, 5.0);
        let mut out = Vec::new();
        t.interpret(sentence, 5, max_depth(sentence, 5), 1, &palette(), &mut out);
        assert_eq!(t.stack_depth(), 2);
    }

    #[test]
    fn stray_pop_is_ignored() {
        let cmds = render("F]F", 25.0, 10.0, 3, 0, &palette());
        assert_eq!(cmds.len(), 2);
        assert!(approx(cmds[1].from, Vec2::new(0.0, -10.0)));
        assert!(approx(cmds[1].to, Vec2::new(0.0, -20.0)));
    }

    #[test]
    fn reveal_past_end_is_clamped() {
        let full = render("F[+F]F", 25.0, 10.0, 6, 3, &palette());
        let over = render("F[+F]F", 25.0, 10.0, 600, 3, &palette());
        assert_eq!(full, over);
        assert!(render("F[+F]F", 25.0, 10.0, 0, 3, &palette()).is_empty());
    }

    #[test]
    fn noop_symbols_take_reveal_slots() {
        // Only the `X` fits in a reveal of one.
        assert!(render("XF", 25.0, 10.0, 1, 0, &palette()).is_empty());
        assert_eq!(render("XF", 25.0, 10.0, 2, 0, &palette()).len(), 1);
    }

    #[test]
    fn max_depth_tracks_revealed_prefix_only() {
        let s = "F[F[F[F[F]]]]F";
        assert_eq!(max_depth(s, 1), 0);
        assert_eq!(max_depth(s, 2), 1);
        assert_eq!(max_depth(s, 6), 3);
        assert_eq!(max_depth(s, s.len()), 4);
        assert_eq!(max_depth("]]][", 4), 1);
    }

    #[test]
    fn incremental_scan_matches_full_scan() {
        let s = "F[+F[-F]]]F[[X]-X]-F[-FX]+X";
        let len = s.chars().count();
        let mut scan = DepthScan::new();
        for reveal in 0..=len + 3 {
            assert_eq!(scan.advance(s, reveal), max_depth(s, reveal));
        }
        assert_eq!(scan.scanned(), len);

        // Shrinking restarts the scan.
        assert_eq!(scan.advance(s, 2), max_depth(s, 2));
        assert_eq!(scan.scanned(), 2);
    }

    #[test]
    fn thickness_decreases_toward_tips_with_floor() {
        assert!((thickness(4, 0) - 4.0).abs() < EPS);
        assert!((thickness(4, 2) - 2.4).abs() < EPS);
        assert_eq!(thickness(4, 4), MIN_THICKNESS);
        assert_eq!(thickness(0, 3), MIN_THICKNESS);
    }

    #[test]
    fn palette_style_by_depth() {
        let p = palette();
        assert_eq!(p.color(0, 0, 0), p.trunk);
        assert_eq!(p.color(1, 9, 0), p.trunk);
        assert_eq!(p.color(2, 0, 0), p.branch);
        assert_eq!(p.color(3, 0, 0), p.branch);

        // Autumn has six leaves: (5 + 10) mod 6 = 3.
        assert_eq!(p.color(4, 10, 5), p.leaves[3]);
    }

    #[test]
    fn leaf_color_stable_across_renders() {
        let s = "F[[[[F]]]]F[[[[F+F]]]]";
        let len = s.chars().count();
        let a = render(s, 22.5, 4.0, len, 1_234, &palette());
        let b = render(s, 22.5, 4.0, len, 1_234, &palette());
        assert_eq!(a, b);

        let leaves: Vec<Rgb> = a.iter().skip(1).map(|c| c.color).collect();
        assert_eq!(leaves[0], palette().leaves[(1_234 + 5) % 6]);
    }

    #[test]
    fn leafless_palette_falls_back_to_branch() {
        let mut p = palette();
        p.leaves.clear();
        assert_eq!(p.color(9, 3, 3), p.branch);
        assert_eq!(leaf_index(3, 3, 0), None);
    }

    #[test]
    fn leaf_index_handles_huge_seeds() {
        assert_eq!(leaf_index(u64::MAX, 1, 4), Some(((u64::MAX % 4 + 1) % 4) as usize));
    }

    #[test]
    fn translated_shifts_both_ends() {
        let cmd = DrawCommand {
            from: Vec2::ZERO,
            to: Vec2::new(1.0, 1.0),
            color: Rgb::new(1, 2, 3),
            thickness: 2.0,
        };
        let moved = cmd.translated(Vec2::new(10.0, 20.0));
        assert_eq!(moved.from, Vec2::new(10.0, 20.0));
        assert_eq!(moved.to, Vec2::new(11.0, 21.0));
        assert_eq!(moved.color, cmd.color);
    }
}
