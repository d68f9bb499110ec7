//! Fixed catalog of plant grammars and the seeded selector.
//!
//! The catalog is built once and shared read-only. Selection always hands
//! out an owned [`Grammar`], so per-plant angle mutation can never leak
//! back into the catalog.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::random::LcgStream;

/// Lower bound of a mutated turn angle, in degrees.
pub const MIN_ANGLE: f32 = 15.0;
/// Upper bound of a mutated turn angle, in degrees.
pub const MAX_ANGLE: f32 = 35.0;
/// Full width of the angle perturbation; a draw of `r` adds `(r - 0.5) * SPREAD`.
pub const ANGLE_SPREAD: f32 = 10.0;

/// A rewrite grammar: axiom, production rules and turn angle.
///
/// Symbols without a rule are terminals and rewrite to themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct Grammar {
    pub name: String,
    pub axiom: String,
    pub rules: BTreeMap<char, String>,
    /// Turn angle in degrees.
    pub angle: f32,
}

impl Grammar {
    pub fn new(name: impl Into<String>, axiom: impl Into<String>, angle: f32) -> Self {
        Self {
            name: name.into(),
            axiom: axiom.into(),
            rules: BTreeMap::new(),
            angle,
        }
    }

    pub fn with_rule(mut self, symbol: char, replacement: impl Into<String>) -> Self {
        self.rules.insert(symbol, replacement.into());
        self
    }

    pub fn rule(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }
}

static CATALOG: LazyLock<Vec<Grammar>> = LazyLock::new(|| {
    vec![
        Grammar::new("classic_tree", "F", 25.0).with_rule('F', "FF+[+F-F-F]-[-F+F+F]"),
        Grammar::new("bush", "F", 20.0).with_rule('F', "F[+F]F[-F][F]"),
        Grammar::new("fern", "X", 25.0)
            .with_rule('X', "F+[[X]-X]-F[-FX]+X")
            .with_rule('F', "FF"),
        Grammar::new("elegant_tree", "F", 25.7).with_rule('F', "F[+F]F[-F]F"),
        Grammar::new("flower", "F", 22.5).with_rule('F', "FF+[+F-F-F]-[-F+F+F]"),
        Grammar::new("tall_tree", "X", 30.0)
            .with_rule('X', "F[+X][-X]FX")
            .with_rule('F', "FF"),
    ]
});

/// All predefined grammars, in catalog index order.
pub fn catalog() -> &'static [Grammar] {
    &CATALOG
}

pub fn by_index(index: usize) -> Option<&'static Grammar> {
    CATALOG.get(index)
}

pub fn by_name(name: &str) -> Option<&'static Grammar> {
    CATALOG.iter().find(|g| g.name == name)
}

/// Picks one catalog grammar uniformly, consuming exactly one draw.
///
/// ### Parameters
/// - `stream` - Seeded stream; advanced by one step.
///
/// ### Returns
/// An owned copy of the catalog entry at `floor(r * catalog_len)`.
pub fn select_grammar(stream: &mut LcgStream) -> Grammar {
    let r = stream.next_unit();
    let len = CATALOG.len();
    // r < 1, but guard the float product anyway.
    let index = ((r * len as f32).floor() as usize).min(len - 1);
    CATALOG[index].clone()
}

/// Perturbs the turn angle by up to half of [`ANGLE_SPREAD`] in either
/// direction and clamps it to `[MIN_ANGLE, MAX_ANGLE]`, consuming one draw.
pub fn mutate_angle(mut grammar: Grammar, stream: &mut LcgStream) -> Grammar {
    let r = stream.next_unit();
    grammar.angle += (r - 0.5) * ANGLE_SPREAD;
    grammar.angle = grammar.angle.clamp(MIN_ANGLE, MAX_ANGLE);
    grammar
}
