//! Core generative pipeline for seeded L-system flora.
//!
//! Main components:
//! - [`random`] — seedable linear-congruential stream.
//! - [`grammar`] — the fixed grammar catalog, selection and angle mutation.
//! - [`lsystem`] — symbol expansion and the symbol dispatch table.
//! - [`turtle`] — turtle interpretation into styled draw commands.
//! - [`growth`] — per-plant reveal progress.
//! - [`plant`] — a seeded plant tying the above together.
//! - [`season`] — seasonal palettes and interpolation.
//! - [`scene`] — the bounded, ordered set of live plants.
//! - [`seed`] — injectable seed sources.
//! - [`config`] — scene configuration and validation.
//! - [`types`] — shared type aliases.

pub mod config;
pub mod grammar;
pub mod growth;
pub mod lsystem;
pub mod plant;
pub mod random;
pub mod scene;
pub mod season;
pub mod seed;
pub mod turtle;
pub mod types;
