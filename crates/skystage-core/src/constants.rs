//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Orbit motion ---

/// Fixed multiplier applied to orbit speed so config values stay near 1.0
/// (degrees per second per unit of configured speed).
pub const ORBIT_SPEED_SCALE: f32 = 20.0;

/// Degrees in a full turn; orbit angles wrap into [0, FULL_TURN_DEG).
pub const FULL_TURN_DEG: f32 = 360.0;

// --- Cloud layer defaults ---

/// Default number of clouds on the orbit ring.
pub const CLOUD_DENSITY: u32 = 20;

/// Default orbit radius (meters).
pub const CLOUD_RADIUS: f32 = 5.0;

/// Default per-cloud radius jitter (± meters).
pub const CLOUD_RADIUS_JITTER: f32 = 1.0;

/// Default cloud height band (meters, local frame).
pub const CLOUD_MIN_HEIGHT: f32 = -1.0;
pub const CLOUD_MAX_HEIGHT: f32 = 2.0;

/// Default target-scale band for spawned clouds.
pub const CLOUD_MIN_SCALE: f32 = 0.8;
pub const CLOUD_MAX_SCALE: f32 = 1.2;

/// Default scale-in transition duration (seconds).
pub const CLOUD_SCALE_IN_SECS: f32 = 1.5;

/// Default spawn-stagger delay window (seconds).
pub const CLOUD_MIN_SPAWN_DELAY: f32 = 0.05;
pub const CLOUD_MAX_SPAWN_DELAY: f32 = 0.25;

/// Default base orbit speed and per-cloud speed variation fraction.
pub const CLOUD_ORBIT_SPEED: f32 = 1.0;
pub const CLOUD_SPEED_VARIATION: f32 = 0.3;

/// Default vertical bob amplitude (meters) and frequency (rad/s).
pub const CLOUD_BOB_AMPLITUDE: f32 = 0.2;
pub const CLOUD_BOB_SPEED: f32 = 1.0;

// --- Particle cylinder defaults ---

/// Default particle pool size.
pub const PARTICLE_MAX: usize = 128;

/// Default cylinder radius (meters) and length along the local Z axis.
pub const CYLINDER_RADIUS: f32 = 2.0;
pub const CYLINDER_LENGTH: f32 = 3.0;

/// Default base angular speed (rad/s).
pub const PARTICLE_BASE_SPEED: f32 = 1.0;

/// Per-particle random speed factor band.
pub const PARTICLE_SPEED_FACTOR_MIN: f32 = 0.8;
pub const PARTICLE_SPEED_FACTOR_MAX: f32 = 1.2;

/// Default axial wave amplitude (meters) and frequency (rad/s).
pub const PARTICLE_WAVE_AMPLITUDE: f32 = 0.5;
pub const PARTICLE_WAVE_FREQUENCY: f32 = 1.0;

/// Default size-pulse fraction (0.1 = ±10% of base size) and rate (rad/s).
pub const PARTICLE_PULSE_AMOUNT: f32 = 0.1;
pub const PARTICLE_PULSE_SPEED: f32 = 1.0;

/// Default base particle size before pulsing.
pub const PARTICLE_BASE_SIZE: f32 = 0.1;

/// Default particle lifetime band (seconds) before a slot is recycled.
pub const PARTICLE_MIN_LIFETIME: f32 = 4.0;
pub const PARTICLE_MAX_LIFETIME: f32 = 10.0;

// --- Rigs ---

/// Billboard yaw blend rate (per second, exponential-smoothing style).
pub const BILLBOARD_TURN_RATE: f32 = 5.0;

/// Threshold below which a look direction is considered degenerate.
pub const BILLBOARD_MIN_DIRECTION_SQ: f32 = 0.001;

/// Lagged-follow blend rates (per second).
pub const FOLLOW_POSITION_RATE: f32 = 5.0;
pub const FOLLOW_ROTATION_RATE: f32 = 4.0;

// --- Tag reveal ---

/// Default duration of the line draw and of each panel fill (seconds).
pub const TAG_DRAW_SECS: f32 = 0.25;

/// Duration of each anchor-dot pop (seconds).
pub const TAG_DOT_SCALE_SECS: f32 = 0.2;

/// Default delay before the reveal sequence begins (seconds).
pub const TAG_INITIAL_DELAY_SECS: f32 = 0.0;

/// Default per-character typewriter delay (seconds).
pub const TYPEWRITER_CHAR_DELAY: f32 = 0.005;

// --- Time scale ---

/// Maximum allowed time-scale multiplier.
pub const MAX_TIME_SCALE: f32 = 4.0;
