//! Commands accepted by the scene engine.
//!
//! The host (renderer, input layer, or test) queues these; the engine
//! drains the queue at the start of each tick.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A command from the host to the scene engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneCommand {
    /// Begin the scene: spawn clouds, arm particles, start rigs.
    Start,
    /// Show or hide the cloud layer. Hiding resets scales to zero;
    /// showing replays each cloud's scale-in to its recorded target.
    SetCloudLayerVisible { visible: bool },
    /// Inject the tracked pose (player/camera) the rigs steer toward.
    SetTrackedPose { position: Vec3, rotation: Quat },
    /// Move the tag line's anchor points.
    SetTagAnchors { start: Vec3, end: Vec3 },
    /// Begin (or restart) the tag-reveal sequence.
    StartTagReveal,
    /// Abort an in-flight tag reveal; visuals freeze as they are.
    CancelTagReveal,
    /// Adjust wall-clock pacing; sim dt stays fixed.
    SetTimeScale { scale: f32 },
}
