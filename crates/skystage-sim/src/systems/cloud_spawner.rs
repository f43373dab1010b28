//! Cloud spawn scheduler — populates the orbit ring at scene start.
//!
//! With the scale-in effect enabled, cloud 0 spawns immediately and each
//! later slot waits out a fresh random stagger delay; with it disabled,
//! the whole ring spawns in one synchronous pass at full scale.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use skystage_core::config::CloudOrbitConfig;
use skystage_core::events::SceneEvent;

use skystage_anim::secs_to_ticks;

use crate::{gen_band, scene_setup};

/// Spawn-schedule state machine, advanced once per tick.
#[derive(Debug, Clone, Default)]
pub struct SpawnSchedule {
    /// Next slot to spawn.
    next_slot: usize,
    /// Tick at which the next slot is due.
    next_due_tick: u64,
    /// False when misconfiguration disabled spawning entirely.
    enabled: bool,
    done: bool,
}

impl SpawnSchedule {
    /// Build the schedule at scene start. Misconfiguration (no templates
    /// or zero density) logs a warning and yields an inert schedule.
    pub fn new(config: &CloudOrbitConfig, current_tick: u64) -> Self {
        if !config.is_spawnable() {
            if config.templates.is_empty() {
                tracing::warn!("no cloud templates configured; skipping cloud spawning");
            } else {
                tracing::warn!(
                    density = config.density,
                    "cloud density must be greater than zero; skipping cloud spawning"
                );
            }
            return Self {
                enabled: false,
                done: true,
                ..Self::default()
            };
        }
        Self {
            next_slot: 0,
            // Slot 0 is due immediately.
            next_due_tick: current_tick,
            enabled: true,
            done: false,
        }
    }

    /// True once every slot has spawned.
    pub fn is_ready(&self) -> bool {
        self.enabled && self.done
    }
}

/// Spawn any due slots this tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    schedule: &mut SpawnSchedule,
    config: &CloudOrbitConfig,
    current_tick: u64,
    events: &mut Vec<SceneEvent>,
) {
    if schedule.done {
        return;
    }

    let density = config.density as usize;

    // Without the scale-in effect there is no stagger: one synchronous pass.
    if !config.use_scale_in {
        for slot in schedule.next_slot..density {
            scene_setup::spawn_cloud(world, rng, config, slot, current_tick);
            events.push(SceneEvent::CloudSpawned { slot });
        }
        schedule.next_slot = density;
        schedule.done = true;
        events.push(SceneEvent::CloudLayerReady);
        return;
    }

    while !schedule.done && current_tick >= schedule.next_due_tick {
        let slot = schedule.next_slot;
        scene_setup::spawn_cloud(world, rng, config, slot, current_tick);
        events.push(SceneEvent::CloudSpawned { slot });

        schedule.next_slot += 1;
        if schedule.next_slot >= density {
            schedule.done = true;
            events.push(SceneEvent::CloudLayerReady);
        } else {
            let delay = gen_band(rng, config.min_spawn_delay, config.max_spawn_delay);
            schedule.next_due_tick = current_tick + secs_to_ticks(delay);
        }
    }
}
