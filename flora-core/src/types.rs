/// Seed that drives every derived property of a plant.
///
/// The same seed always produces the same grammar, angle, expansion,
/// iteration count and base length, across runs and processes.
pub type Seed = u64;

/// Symbol position inside an expanded sentence.
///
/// Counted in `char`s, so it matches the reveal count used for growth.
pub type SymbolIndex = usize;
