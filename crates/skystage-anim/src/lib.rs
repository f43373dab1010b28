//! Animation primitives for SKYSTAGE.
//!
//! Tick-driven animation state machines: easing curves, a scale-in
//! tween, a typewriter text reveal, and the multi-stage tag-reveal
//! sequence. No ECS dependency — operates on plain data.

pub mod ease;
pub mod reveal;
pub mod tween;
pub mod typewriter;

pub use skystage_core as core;

use skystage_core::constants::TICK_RATE;

/// Convert a duration in seconds to a whole number of ticks (rounded up,
/// so any positive duration waits at least one tick).
pub fn secs_to_ticks(secs: f32) -> u64 {
    if secs <= 0.0 {
        return 0;
    }
    (secs * TICK_RATE as f32).ceil() as u64
}

#[cfg(test)]
mod tests;
