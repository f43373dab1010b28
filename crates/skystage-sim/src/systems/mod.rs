//! Per-tick scene systems, run in a fixed order by the engine.

pub mod billboard;
pub mod cloud_spawner;
pub mod follow;
pub mod orbit_motion;
pub mod particle_cylinder;
pub mod scale_in;
pub mod snapshot;
pub mod visibility;
