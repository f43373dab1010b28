//! Visibility lifecycle for the cloud layer.
//!
//! Hiding resets every spawned cloud's scale to zero (killing in-flight
//! tweens); showing replays each cloud's scale-in with a fresh random
//! stagger delay, easing back to the target scale recorded at spawn.
//! With the scale-in effect disabled, scales snap instantly.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use skystage_core::components::{CloudBody, Transform};
use skystage_core::config::CloudOrbitConfig;
use skystage_core::events::SceneEvent;

use skystage_anim::secs_to_ticks;
use skystage_anim::tween::ScaleTween;

use crate::gen_band;

/// Apply a visibility change to all spawned clouds.
pub fn apply(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &CloudOrbitConfig,
    visible: bool,
    current_tick: u64,
    events: &mut Vec<SceneEvent>,
) {
    if visible {
        show(world, rng, config, current_tick);
        events.push(SceneEvent::CloudLayerShown);
    } else {
        hide(world, config);
        events.push(SceneEvent::CloudLayerHidden);
    }
}

fn hide(world: &mut World, config: &CloudOrbitConfig) {
    if !config.use_scale_in {
        return;
    }
    for (_entity, (_body, tween, transform)) in
        world.query_mut::<(&CloudBody, &mut ScaleTween, &mut Transform)>()
    {
        // Kill any in-flight tween and pin the scale at zero.
        *tween = ScaleTween::completed(0.0);
        transform.scale = 0.0;
    }
}

fn show(world: &mut World, rng: &mut ChaCha8Rng, config: &CloudOrbitConfig, current_tick: u64) {
    for (_entity, (body, tween, transform)) in
        world.query_mut::<(&CloudBody, &mut ScaleTween, &mut Transform)>()
    {
        if config.use_scale_in {
            let delay = gen_band(rng, config.min_spawn_delay, config.max_spawn_delay);
            *tween = ScaleTween::delayed(
                current_tick,
                secs_to_ticks(delay),
                0.0,
                body.target_scale,
                config.scale_in_secs,
            );
        } else {
            *tween = ScaleTween::completed(body.target_scale);
            transform.scale = body.target_scale;
        }
    }
}
