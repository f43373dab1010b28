//! Events emitted by the simulation for host-side feedback (audio cues,
//! haptics, analytics). Drained into each tick's snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::TagStage;

/// One-shot scene event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    /// A cloud finished spawning into its slot.
    CloudSpawned { slot: usize },
    /// All clouds have spawned.
    CloudLayerReady,
    /// The cloud layer was hidden (scales reset).
    CloudLayerHidden,
    /// The cloud layer re-entered visibility (scale-ins replaying).
    CloudLayerShown,
    /// The tag reveal advanced to a new stage.
    TagStageAdvanced { stage: TagStage },
    /// The tag reveal ran to completion.
    TagRevealCompleted,
    /// The tag reveal was cancelled mid-flight.
    TagRevealCancelled,
}
