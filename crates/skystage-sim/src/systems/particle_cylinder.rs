//! Particle cylinder system.
//!
//! A fixed SoA pool (parallel arrays, one slot per particle) orbiting
//! the cylinder's local Z axis with per-particle signed angular speed,
//! an axial sine wave, and a pulsing size. Each slot carries an explicit
//! `initialized` flag: slots are armed on first touch and re-armed when
//! their lifetime expires, so a legitimately-zero speed can never be
//! mistaken for an uninitialized slot.

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystage_core::config::ParticleCylinderConfig;
use skystage_core::constants::{PARTICLE_SPEED_FACTOR_MAX, PARTICLE_SPEED_FACTOR_MIN};

use crate::gen_band;

/// Parallel-array particle storage. All vectors share one length.
#[derive(Debug, Clone, Default)]
pub struct ParticlePool {
    pub positions: Vec<Vec3>,
    pub sizes: Vec<f32>,
    base_sizes: Vec<f32>,
    angles: Vec<f32>,
    /// Signed angular speed (rad/s); sign carries rotation direction.
    speeds: Vec<f32>,
    wave_phases: Vec<f32>,
    base_heights: Vec<f32>,
    /// Remaining lifetime (seconds); expiry recycles the slot.
    lifetimes: Vec<f32>,
    initialized: Vec<bool>,
}

impl ParticlePool {
    /// Allocate a pool. Zero slots logs a warning and yields an inert pool.
    pub fn new(config: &ParticleCylinderConfig) -> Self {
        if config.max_particles == 0 {
            tracing::warn!("max_particles is zero; particle cylinder disabled");
            return Self::default();
        }
        let n = config.max_particles;
        Self {
            positions: vec![Vec3::ZERO; n],
            sizes: vec![0.0; n],
            base_sizes: vec![0.0; n],
            angles: vec![0.0; n],
            speeds: vec![0.0; n],
            wave_phases: vec![0.0; n],
            base_heights: vec![0.0; n],
            lifetimes: vec![0.0; n],
            initialized: vec![false; n],
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of slots currently armed.
    pub fn alive(&self) -> usize {
        self.initialized.iter().filter(|&&init| init).count()
    }

    #[cfg(test)]
    pub fn speed(&self, slot: usize) -> f32 {
        self.speeds[slot]
    }

    #[cfg(test)]
    pub fn remaining_lifetime(&self, slot: usize) -> f32 {
        self.lifetimes[slot]
    }
}

/// Advance the pool one tick: recycle expired slots, arm uninitialized
/// ones, then integrate angle, axial wave, and size pulse for every slot.
pub fn run(
    pool: &mut ParticlePool,
    rng: &mut ChaCha8Rng,
    config: &ParticleCylinderConfig,
    elapsed_secs: f32,
    dt: f32,
) {
    for i in 0..pool.len() {
        if pool.initialized[i] {
            pool.lifetimes[i] -= dt;
            if pool.lifetimes[i] <= 0.0 {
                pool.initialized[i] = false;
            }
        }

        if !pool.initialized[i] {
            arm_slot(pool, rng, config, i);
        }

        pool.angles[i] += pool.speeds[i] * dt;

        // Circular orbit around the local Z axis.
        let x = pool.angles[i].cos() * config.radius;
        let y = pool.angles[i].sin() * config.radius;

        // Gentle drift along the axis around the slot's base height.
        let wave = (elapsed_secs * config.vertical_frequency + pool.wave_phases[i]).sin()
            * config.vertical_amplitude;
        let z = pool.base_heights[i] + wave;

        pool.positions[i] = Vec3::new(x, y, z);

        // Breathing size pulse around the recorded base size.
        let pulse =
            1.0 + (elapsed_secs * config.scale_speed + pool.wave_phases[i]).sin() * config.scale_amount;
        pool.sizes[i] = pool.base_sizes[i] * pulse;
    }
}

/// Randomize a slot's state and mark it initialized.
fn arm_slot(pool: &mut ParticlePool, rng: &mut ChaCha8Rng, config: &ParticleCylinderConfig, i: usize) {
    pool.angles[i] = rng.gen_range(0.0..std::f32::consts::TAU);

    let factor = rng.gen_range(PARTICLE_SPEED_FACTOR_MIN..=PARTICLE_SPEED_FACTOR_MAX);
    let direction = if config.uniform_clockwise {
        1.0
    } else if rng.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    };
    pool.speeds[i] = config.base_speed * factor * direction;

    pool.wave_phases[i] = rng.gen_range(0.0..std::f32::consts::TAU);
    pool.base_heights[i] = gen_band(rng, -config.length * 0.5, config.length * 0.5);
    pool.base_sizes[i] =
        config.base_size * rng.gen_range(PARTICLE_SPEED_FACTOR_MIN..=PARTICLE_SPEED_FACTOR_MAX);
    pool.lifetimes[i] = gen_band(rng, config.min_lifetime, config.max_lifetime);
    pool.initialized[i] = true;
}
