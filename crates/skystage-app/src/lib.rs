//! SKYSTAGE headless runner.
//!
//! Wires the scene engine to a fixed-rate loop thread and streams
//! snapshots to the host process as JSON lines.

pub mod scene_loop;

pub use skystage_core as core;
