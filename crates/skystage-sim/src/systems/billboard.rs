//! Billboard system: smoothly turns entities to face the tracked pose.
//!
//! Yaw-only look rotation blended with slerp. The tracked pose is
//! injected by the host via command; with none set, nothing turns.

use glam::Quat;
use hecs::World;

use skystage_core::components::{Billboard, Transform};
use skystage_core::constants::BILLBOARD_MIN_DIRECTION_SQ;
use skystage_core::types::Pose;

/// Rotate every billboard toward `tracked` by one tick's blend.
pub fn run(world: &mut World, tracked: Option<&Pose>, dt: f32) {
    let Some(target) = tracked else {
        return;
    };

    for (_entity, (billboard, transform)) in world.query_mut::<(&Billboard, &mut Transform)>() {
        let mut direction = target.position - transform.translation;
        direction.y = 0.0;
        if direction.length_squared() <= BILLBOARD_MIN_DIRECTION_SQ {
            continue;
        }

        // Yaw that points local +Z along the horizontal direction.
        let yaw = direction.x.atan2(direction.z);
        let target_rotation = Quat::from_rotation_y(yaw);

        let blend = (billboard.turn_rate * dt).clamp(0.0, 1.0);
        transform.rotation = transform.rotation.slerp(target_rotation, blend);
    }
}
