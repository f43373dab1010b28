//! Scene configuration — the serialized fields a host editor would expose.
//!
//! All configs deserialize from the host's scene description. Defaults
//! mirror the reference presentation scene.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Top-level configuration for a scene engine instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// RNG seed for determinism. Same seed = same snapshot stream.
    pub seed: u64,
    pub clouds: CloudOrbitConfig,
    pub particles: ParticleCylinderConfig,
    pub rig: RigConfig,
    pub tag: TagRevealConfig,
}

/// Configuration for the orbiting cloud layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudOrbitConfig {
    /// Asset keys of the visual templates to pick from at spawn.
    pub templates: Vec<String>,
    /// Number of clouds on the ring.
    pub density: u32,
    /// Base orbit radius (meters).
    pub radius: f32,
    /// Per-cloud radius jitter (± meters).
    pub radius_jitter: f32,
    /// Height band for spawned clouds (meters).
    pub min_height: f32,
    pub max_height: f32,
    /// Whether clouds scale in from zero when they appear.
    pub use_scale_in: bool,
    /// Target-scale band.
    pub min_scale: f32,
    pub max_scale: f32,
    /// Scale-in transition duration (seconds).
    pub scale_in_secs: f32,
    /// Random spawn-stagger window (seconds).
    pub min_spawn_delay: f32,
    pub max_spawn_delay: f32,
    /// Base orbit speed (config units; scaled by ORBIT_SPEED_SCALE).
    pub orbit_speed: f32,
    /// Per-cloud speed variation fraction in [0, 1].
    pub speed_variation: f32,
    /// Vertical bob amplitude (meters) and frequency (rad/s).
    pub bob_amplitude: f32,
    pub bob_speed: f32,
}

impl Default for CloudOrbitConfig {
    fn default() -> Self {
        Self {
            templates: vec![
                "cloud_a".into(),
                "cloud_b".into(),
                "cloud_c".into(),
            ],
            density: CLOUD_DENSITY,
            radius: CLOUD_RADIUS,
            radius_jitter: CLOUD_RADIUS_JITTER,
            min_height: CLOUD_MIN_HEIGHT,
            max_height: CLOUD_MAX_HEIGHT,
            use_scale_in: true,
            min_scale: CLOUD_MIN_SCALE,
            max_scale: CLOUD_MAX_SCALE,
            scale_in_secs: CLOUD_SCALE_IN_SECS,
            min_spawn_delay: CLOUD_MIN_SPAWN_DELAY,
            max_spawn_delay: CLOUD_MAX_SPAWN_DELAY,
            orbit_speed: CLOUD_ORBIT_SPEED,
            speed_variation: CLOUD_SPEED_VARIATION,
            bob_amplitude: CLOUD_BOB_AMPLITUDE,
            bob_speed: CLOUD_BOB_SPEED,
        }
    }
}

impl CloudOrbitConfig {
    /// False when spawning must be skipped (empty templates or zero density).
    /// Callers log the warning; this stays side-effect free.
    pub fn is_spawnable(&self) -> bool {
        !self.templates.is_empty() && self.density > 0
    }
}

/// Configuration for the particle cylinder layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleCylinderConfig {
    /// Pool size (parallel-array slot count).
    pub max_particles: usize,
    /// Cylinder radius (meters); the axis is local Z.
    pub radius: f32,
    /// Cylinder length along the axis (meters).
    pub length: f32,
    /// Base angular speed (rad/s).
    pub base_speed: f32,
    /// All particles orbit the same direction when true; otherwise each
    /// particle picks a random sign at initialization.
    pub uniform_clockwise: bool,
    /// Axial wave amplitude (meters) and frequency (rad/s).
    pub vertical_amplitude: f32,
    pub vertical_frequency: f32,
    /// Size-pulse fraction (0.1 = ±10% of base size) and rate (rad/s).
    pub scale_amount: f32,
    pub scale_speed: f32,
    /// Base size assigned to a slot at initialization.
    pub base_size: f32,
    /// Lifetime band (seconds) before a slot is recycled.
    pub min_lifetime: f32,
    pub max_lifetime: f32,
}

impl Default for ParticleCylinderConfig {
    fn default() -> Self {
        Self {
            max_particles: PARTICLE_MAX,
            radius: CYLINDER_RADIUS,
            length: CYLINDER_LENGTH,
            base_speed: PARTICLE_BASE_SPEED,
            uniform_clockwise: true,
            vertical_amplitude: PARTICLE_WAVE_AMPLITUDE,
            vertical_frequency: PARTICLE_WAVE_FREQUENCY,
            scale_amount: PARTICLE_PULSE_AMOUNT,
            scale_speed: PARTICLE_PULSE_SPEED,
            base_size: PARTICLE_BASE_SIZE,
            min_lifetime: PARTICLE_MIN_LIFETIME,
            max_lifetime: PARTICLE_MAX_LIFETIME,
        }
    }
}

/// Configuration for the billboard and lagged-follow rigs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    pub billboard_turn_rate: f32,
    pub follow_position_rate: f32,
    pub follow_rotation_rate: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            billboard_turn_rate: BILLBOARD_TURN_RATE,
            follow_position_rate: FOLLOW_POSITION_RATE,
            follow_rotation_rate: FOLLOW_ROTATION_RATE,
        }
    }
}

/// Configuration for the tag-reveal sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TagRevealConfig {
    /// Delay before the sequence starts (seconds).
    pub initial_delay_secs: f32,
    /// Duration of the line draw and of each panel fill (seconds).
    pub draw_secs: f32,
    /// Label strings revealed by concurrent typewriters. May contain
    /// `<...>` markup spans, which reveal atomically.
    pub labels: Vec<String>,
    /// Per-character typewriter delay (seconds).
    pub char_delay_secs: f32,
    /// Initial positions of the two line anchors (movable via command).
    pub start_anchor: Vec3,
    pub end_anchor: Vec3,
}

impl Default for TagRevealConfig {
    fn default() -> Self {
        Self {
            initial_delay_secs: TAG_INITIAL_DELAY_SECS,
            draw_secs: TAG_DRAW_SECS,
            labels: Vec::new(),
            char_delay_secs: TYPEWRITER_CHAR_DELAY,
            start_anchor: Vec3::ZERO,
            end_anchor: Vec3::new(0.0, 0.5, 0.0),
        }
    }
}
