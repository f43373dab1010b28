//! Entity spawn factories for setting up the scene world.
//!
//! Creates the camera rigs and individual cloud instances with
//! appropriate component bundles.

use glam::{Quat, Vec3};
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystage_core::components::{Billboard, CloudBody, LaggedFollow, Transform};
use skystage_core::config::{CloudOrbitConfig, RigConfig};
use skystage_core::constants::FULL_TURN_DEG;

use skystage_anim::tween::ScaleTween;

use crate::gen_band;

/// Spawn the billboard and lagged-follow rigs at the origin.
pub fn spawn_rigs(world: &mut World, config: &RigConfig) {
    world.spawn((
        Transform::default(),
        Billboard {
            turn_rate: config.billboard_turn_rate,
        },
    ));
    world.spawn((
        Transform::default(),
        LaggedFollow {
            position_rate: config.follow_position_rate,
            rotation_rate: config.follow_rotation_rate,
        },
    ));
}

/// Spawn one cloud into its slot with randomized orbit parameters.
///
/// Slot `i` sits at `(360 / density) * i` degrees so the ring starts out
/// evenly spaced; radius, height, yaw, speed, bob phase, and target scale
/// are all jittered per cloud.
pub fn spawn_cloud(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &CloudOrbitConfig,
    slot: usize,
    current_tick: u64,
) -> hecs::Entity {
    let template = rng.gen_range(0..config.templates.len());
    let target_scale = gen_band(rng, config.min_scale, config.max_scale);
    let angle_deg = (FULL_TURN_DEG / config.density as f32) * slot as f32;
    let speed_factor =
        gen_band(rng, 1.0 - config.speed_variation, 1.0 + config.speed_variation);
    let bob_phase = rng.gen_range(0.0..std::f32::consts::TAU);
    let height = gen_band(rng, config.min_height, config.max_height);
    let radius = config.radius + gen_band(rng, -config.radius_jitter, config.radius_jitter);
    let yaw_deg = rng.gen_range(0.0..FULL_TURN_DEG);

    let body = CloudBody {
        slot,
        template,
        angle_deg,
        speed_factor,
        radius,
        height,
        bob_phase,
        yaw_deg,
        target_scale,
    };

    let angle_rad = angle_deg.to_radians();
    let translation = Vec3::new(
        angle_rad.cos() * radius,
        height,
        angle_rad.sin() * radius,
    );

    let (scale, tween) = if config.use_scale_in {
        // Starts at zero; the scale-in system eases it up to target.
        (
            0.0,
            ScaleTween::delayed(current_tick, 0, 0.0, target_scale, config.scale_in_secs),
        )
    } else {
        (target_scale, ScaleTween::completed(target_scale))
    };

    let transform = Transform {
        translation,
        rotation: Quat::from_rotation_y(yaw_deg.to_radians()),
        scale,
    };

    world.spawn((body, transform, tween))
}
