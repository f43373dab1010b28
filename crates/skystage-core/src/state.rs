//! Scene snapshot — the complete visible state sent to the host each tick.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::{ScenePhase, TagStage};
use crate::events::SceneEvent;
use crate::types::SimTime;

/// Complete scene state broadcast to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub time: SimTime,
    pub phase: ScenePhase,
    pub clouds: CloudLayerView,
    pub particles: ParticleLayerView,
    pub rigs: RigView,
    pub tag: TagView,
    pub events: Vec<SceneEvent>,
}

/// The orbiting cloud layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloudLayerView {
    pub visible: bool,
    /// True once every slot has spawned.
    pub ready: bool,
    pub clouds: Vec<CloudView>,
}

/// One cloud instance, in spawn-slot order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudView {
    pub slot: usize,
    /// Asset key of the template this cloud was built from.
    pub template: String,
    pub position: Vec3,
    /// Yaw in degrees.
    pub yaw_deg: f32,
    pub scale: f32,
}

/// The particle cylinder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticleLayerView {
    pub alive: usize,
    pub particles: Vec<ParticleView>,
}

/// One live particle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Vec3,
    pub size: f32,
}

/// Billboard and follow rig poses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RigView {
    pub billboard_position: Vec3,
    pub billboard_rotation: Quat,
    pub follow_position: Vec3,
    pub follow_rotation: Quat,
}

impl Default for RigView {
    fn default() -> Self {
        Self {
            billboard_position: Vec3::ZERO,
            billboard_rotation: Quat::IDENTITY,
            follow_position: Vec3::ZERO,
            follow_rotation: Quat::IDENTITY,
        }
    }
}

/// The tag-reveal overlay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagView {
    pub stage: TagStage,
    /// Whether the connecting line is visible at all.
    pub line_visible: bool,
    pub line_start: Vec3,
    pub line_end: Vec3,
    /// Anchor-dot pop scales in [0, 1].
    pub start_dot_scale: f32,
    pub end_dot_scale: f32,
    /// Panel fill amounts in [0, 1].
    pub header_fill: f32,
    pub body_fill: f32,
    /// Text revealed so far, one entry per configured label.
    pub labels: Vec<String>,
}
