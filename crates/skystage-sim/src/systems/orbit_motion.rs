//! Orbit motion integration system.
//!
//! Advances each cloud's orbit angle by its speed term, layers a sine
//! bob on the base height, and recomputes the local position from
//! angle/radius/height. Clouds never interact; each touches only its
//! own parameters.

use hecs::World;

use skystage_core::components::{CloudBody, Transform};
use skystage_core::config::CloudOrbitConfig;
use skystage_core::constants::ORBIT_SPEED_SCALE;
use skystage_core::types::wrap_degrees;

/// Integrate one tick of orbital motion for every cloud.
///
/// `elapsed_secs` drives the bob term (absolute time), `dt` drives the
/// angular advance; with `dt == 0` only the bob moves.
pub fn run(world: &mut World, config: &CloudOrbitConfig, elapsed_secs: f32, dt: f32) {
    for (_entity, (body, transform)) in world.query_mut::<(&mut CloudBody, &mut Transform)>() {
        body.angle_deg = wrap_degrees(
            body.angle_deg + dt * config.orbit_speed * body.speed_factor * ORBIT_SPEED_SCALE,
        );

        let bob = (elapsed_secs * config.bob_speed + body.bob_phase).sin() * config.bob_amplitude;

        let angle_rad = body.angle_deg.to_radians();
        transform.translation.x = angle_rad.cos() * body.radius;
        transform.translation.y = body.height + bob;
        transform.translation.z = angle_rad.sin() * body.radius;
    }
}
