//! Lagged-follow system: trails the tracked pose with independent
//! position and rotation lag, producing the trailing-rig effect.

use hecs::World;

use skystage_core::components::{LaggedFollow, Transform};
use skystage_core::types::Pose;

/// Blend every follow rig toward `tracked` by one tick.
pub fn run(world: &mut World, tracked: Option<&Pose>, dt: f32) {
    let Some(target) = tracked else {
        return;
    };

    for (_entity, (follow, transform)) in world.query_mut::<(&LaggedFollow, &mut Transform)>() {
        let pos_blend = (follow.position_rate * dt).clamp(0.0, 1.0);
        let rot_blend = (follow.rotation_rate * dt).clamp(0.0, 1.0);

        transform.translation = transform.translation.lerp(target.position, pos_blend);
        transform.rotation = transform
            .rotation
            .lerp(target.rotation, rot_blend)
            .normalize();
    }
}
