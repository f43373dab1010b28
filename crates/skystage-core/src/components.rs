//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Scene logic lives in systems, not components.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Local-space transform written back to the host renderer each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    /// Uniform scale.
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

/// Per-cloud orbit parameters, randomized once at spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CloudBody {
    /// Slot index in the spawn order (stable identity for views/tests).
    pub slot: usize,
    /// Index into the configured template list.
    pub template: usize,
    /// Current orbit angle in degrees, wraps at 360.
    pub angle_deg: f32,
    /// Per-cloud multiplier on the base orbit speed.
    pub speed_factor: f32,
    /// Orbit radius after jitter (meters).
    pub radius: f32,
    /// Base height on the ring (meters), before bobbing.
    pub height: f32,
    /// Phase offset for the vertical bob (radians).
    pub bob_phase: f32,
    /// Fixed yaw assigned at spawn (degrees).
    pub yaw_deg: f32,
    /// Scale this cloud settles at after its scale-in transition.
    pub target_scale: f32,
}

/// Rotates an entity's yaw toward the tracked pose every tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Billboard {
    /// Slerp blend rate (per second).
    pub turn_rate: f32,
}

/// Trails the tracked pose with independent position/rotation lag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LaggedFollow {
    /// Position lerp rate (per second).
    pub position_rate: f32,
    /// Rotation lerp rate (per second).
    pub rotation_rate: f32,
}
