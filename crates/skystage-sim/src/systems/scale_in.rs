//! Scale-in system: drives each cloud's scale tween and writes the
//! result into its transform. Tweens are replaced wholesale on
//! retrigger (visibility changes), so one writer owns each scale.

use hecs::World;

use skystage_core::components::Transform;
use skystage_anim::tween::ScaleTween;

/// Advance every scale tween to `current_tick`.
pub fn run(world: &mut World, current_tick: u64) {
    for (_entity, (tween, transform)) in world.query_mut::<(&mut ScaleTween, &mut Transform)>() {
        transform.scale = tween.advance(current_tick);
    }
}
