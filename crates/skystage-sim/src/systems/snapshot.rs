//! Snapshot system: queries the ECS world and builds a complete
//! SceneSnapshot. Read-only — it never modifies the world.

use hecs::World;

use skystage_core::components::{Billboard, CloudBody, LaggedFollow, Transform};
use skystage_core::config::SceneConfig;
use skystage_core::enums::ScenePhase;
use skystage_core::events::SceneEvent;
use skystage_core::state::*;
use skystage_core::types::SimTime;

use skystage_anim::reveal::TagReveal;

use crate::systems::particle_cylinder::ParticlePool;

/// Build a complete SceneSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: ScenePhase,
    config: &SceneConfig,
    cloud_layer_visible: bool,
    cloud_layer_ready: bool,
    pool: &ParticlePool,
    tag: &TagReveal,
    events: Vec<SceneEvent>,
) -> SceneSnapshot {
    SceneSnapshot {
        time: *time,
        phase,
        clouds: build_cloud_layer(world, config, cloud_layer_visible, cloud_layer_ready),
        particles: build_particle_layer(pool),
        rigs: build_rigs(world),
        tag: build_tag(tag, config),
        events,
    }
}

fn build_cloud_layer(
    world: &World,
    config: &SceneConfig,
    visible: bool,
    ready: bool,
) -> CloudLayerView {
    let mut clouds: Vec<CloudView> = world
        .query::<(&CloudBody, &Transform)>()
        .iter()
        .map(|(_entity, (body, transform))| CloudView {
            slot: body.slot,
            template: config
                .clouds
                .templates
                .get(body.template)
                .cloned()
                .unwrap_or_default(),
            position: transform.translation,
            yaw_deg: body.yaw_deg,
            scale: transform.scale,
        })
        .collect();
    // Spawn-slot order keeps the view stable across runs.
    clouds.sort_by_key(|c| c.slot);

    CloudLayerView {
        visible,
        ready,
        clouds,
    }
}

fn build_particle_layer(pool: &ParticlePool) -> ParticleLayerView {
    ParticleLayerView {
        alive: pool.alive(),
        particles: pool
            .positions
            .iter()
            .zip(&pool.sizes)
            .map(|(&position, &size)| ParticleView { position, size })
            .collect(),
    }
}

fn build_rigs(world: &World) -> RigView {
    let mut view = RigView::default();

    for (_entity, (_billboard, transform)) in world.query::<(&Billboard, &Transform)>().iter() {
        view.billboard_position = transform.translation;
        view.billboard_rotation = transform.rotation;
    }
    for (_entity, (_follow, transform)) in world.query::<(&LaggedFollow, &Transform)>().iter() {
        view.follow_position = transform.translation;
        view.follow_rotation = transform.rotation;
    }

    view
}

fn build_tag(tag: &TagReveal, config: &SceneConfig) -> TagView {
    // Until the typewriters exist, every label reads as empty.
    let labels = if tag.typewriters.is_empty() {
        vec![String::new(); config.tag.labels.len()]
    } else {
        tag.typewriters
            .iter()
            .map(|tw| tw.revealed().to_string())
            .collect()
    };

    TagView {
        stage: tag.stage,
        line_visible: tag.line_visible,
        line_start: tag.line_start,
        line_end: tag.line_end,
        start_dot_scale: tag.start_dot_scale,
        end_dot_scale: tag.end_dot_scale,
        header_fill: tag.header_fill,
        body_fill: tag.body_fill,
        labels,
    }
}
