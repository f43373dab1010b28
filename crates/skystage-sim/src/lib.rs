//! Scene engine for SKYSTAGE.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces SceneSnapshots for the host renderer.

pub mod engine;
pub mod scene_setup;
pub mod systems;

pub use engine::SceneEngine;
pub use skystage_core as core;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Sample uniformly from the closed band between `a` and `b`, in either
/// order. Config bands arrive from host JSON; a swapped min/max pair
/// must degrade to the same band, not abort the tick.
pub(crate) fn gen_band(rng: &mut ChaCha8Rng, a: f32, b: f32) -> f32 {
    rng.gen_range(a.min(b)..=a.max(b))
}
