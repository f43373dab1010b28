//! Scene engine — the heart of the simulation.
//!
//! `SceneEngine` owns the hecs ECS world, processes host commands, runs
//! all systems, and produces a `SceneSnapshot` each tick. Completely
//! headless (no renderer dependency), enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skystage_core::commands::SceneCommand;
use skystage_core::config::SceneConfig;
use skystage_core::constants::MAX_TIME_SCALE;
use skystage_core::enums::ScenePhase;
use skystage_core::events::SceneEvent;
use skystage_core::state::SceneSnapshot;
use skystage_core::types::{Pose, SimTime};

use skystage_anim::reveal::TagReveal;

use crate::scene_setup;
use crate::systems;
use crate::systems::cloud_spawner::SpawnSchedule;
use crate::systems::particle_cylinder::ParticlePool;

/// The scene engine. Owns the ECS world and all scene state.
pub struct SceneEngine {
    world: World,
    time: SimTime,
    phase: ScenePhase,
    config: SceneConfig,
    rng: ChaCha8Rng,
    time_scale: f32,
    command_queue: VecDeque<SceneCommand>,
    events: Vec<SceneEvent>,

    cloud_layer_visible: bool,
    spawn_schedule: SpawnSchedule,
    particles: ParticlePool,
    tag: TagReveal,
    /// Injected by the host; rigs hold still until the first pose arrives.
    tracked_pose: Option<Pose>,
    tag_anchors: (Vec3, Vec3),
}

impl SceneEngine {
    /// Create a new scene engine with the given config.
    pub fn new(config: SceneConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let tag = TagReveal::new(&config.tag);
        let tag_anchors = (config.tag.start_anchor, config.tag.end_anchor);
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: ScenePhase::default(),
            config,
            rng,
            time_scale: 1.0,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            cloud_layer_visible: true,
            spawn_schedule: SpawnSchedule::default(),
            particles: ParticlePool::default(),
            tag,
            tracked_pose: None,
            tag_anchors,
        }
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SceneCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SceneCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the scene by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SceneSnapshot {
        self.process_commands();

        if self.phase == ScenePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.config,
            self.cloud_layer_visible,
            self.spawn_schedule.is_ready(),
            &self.particles,
            &self.tag,
            events,
        )
    }

    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub fn particles(&self) -> &ParticlePool {
        &self.particles
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single host command.
    fn handle_command(&mut self, command: SceneCommand) {
        match command {
            SceneCommand::Start => {
                if self.phase == ScenePhase::Idle {
                    scene_setup::spawn_rigs(&mut self.world, &self.config.rig);
                    self.spawn_schedule = SpawnSchedule::new(&self.config.clouds, self.time.tick);
                    self.particles = ParticlePool::new(&self.config.particles);
                    self.phase = ScenePhase::Active;
                }
            }
            SceneCommand::SetCloudLayerVisible { visible } => {
                if visible != self.cloud_layer_visible {
                    self.cloud_layer_visible = visible;
                    systems::visibility::apply(
                        &mut self.world,
                        &mut self.rng,
                        &self.config.clouds,
                        visible,
                        self.time.tick,
                        &mut self.events,
                    );
                }
            }
            SceneCommand::SetTrackedPose { position, rotation } => {
                self.tracked_pose = Some(Pose::new(position, rotation));
            }
            SceneCommand::SetTagAnchors { start, end } => {
                self.tag_anchors = (start, end);
            }
            SceneCommand::StartTagReveal => {
                if self.config.tag.labels.is_empty() {
                    tracing::warn!("tag reveal started with no labels configured");
                }
                self.tag.start(&mut self.events);
            }
            SceneCommand::CancelTagReveal => {
                self.tag.cancel(&mut self.events);
            }
            SceneCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let dt = self.time.dt();
        let elapsed = self.time.elapsed_secs;

        // 1. Cloud spawning (staggered or synchronous)
        systems::cloud_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_schedule,
            &self.config.clouds,
            self.time.tick,
            &mut self.events,
        );
        // 2. Scale-in tweens
        systems::scale_in::run(&mut self.world, self.time.tick);
        // 3. Orbit motion integration
        systems::orbit_motion::run(&mut self.world, &self.config.clouds, elapsed, dt);
        // 4. Particle cylinder
        systems::particle_cylinder::run(
            &mut self.particles,
            &mut self.rng,
            &self.config.particles,
            elapsed,
            dt,
        );
        // 5. Billboard yaw tracking
        systems::billboard::run(&mut self.world, self.tracked_pose.as_ref(), dt);
        // 6. Lagged follow
        systems::follow::run(&mut self.world, self.tracked_pose.as_ref(), dt);
        // 7. Tag reveal sequence
        self.tag.step(self.tag_anchors, dt, &mut self.events);
    }
}
