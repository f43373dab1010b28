//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Scene lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenePhase {
    /// Engine constructed, nothing spawned yet.
    #[default]
    Idle,
    /// Scene running: spawning, motion, and reveal systems active.
    Active,
}

/// Stage of the tag-reveal sequence. Stages advance strictly in order;
/// cancellation freezes the sequence at whatever stage it reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagStage {
    /// Not started.
    #[default]
    Idle,
    /// Waiting out the configured pre-animation delay.
    InitialDelay,
    /// Start-anchor dot popping from zero scale.
    StartDot,
    /// Line endpoint interpolating from start anchor to end anchor.
    LineDraw,
    /// End-anchor dot popping from zero scale.
    EndDot,
    /// Header panel fill animating 0 -> 1.
    HeaderFill,
    /// Body panel fill animating 0 -> 1.
    BodyFill,
    /// Concurrent typewriter reveal of all labels.
    TextReveal,
    /// Sequence finished.
    Done,
    /// Sequence aborted; visuals frozen as they were.
    Cancelled,
}

impl TagStage {
    /// Whether the sequence is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TagStage::Done | TagStage::Cancelled)
    }
}
