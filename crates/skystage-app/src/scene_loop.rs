//! Scene loop thread — runs the engine at the fixed tick rate and
//! streams snapshots.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; every snapshot goes
//! back out on a second channel for the host to drain.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use skystage_core::commands::SceneCommand;
use skystage_core::config::SceneConfig;
use skystage_core::constants::TICK_RATE;
use skystage_core::state::SceneSnapshot;
use skystage_sim::SceneEngine;

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands sent from the host to the scene loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A scene command to forward to the engine.
    Scene(SceneCommand),
    /// Shut down the loop thread gracefully.
    Shutdown,
}

/// Spawns the scene loop in a new thread.
///
/// Returns the command sender and the snapshot receiver.
pub fn spawn_scene_loop(
    config: SceneConfig,
) -> (mpsc::Sender<LoopCommand>, mpsc::Receiver<SceneSnapshot>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();
    let (snap_tx, snap_rx) = mpsc::channel::<SceneSnapshot>();

    std::thread::Builder::new()
        .name("skystage-scene-loop".into())
        .spawn(move || {
            run_scene_loop(config, cmd_rx, snap_tx);
        })
        .expect("failed to spawn scene loop thread");

    (cmd_tx, snap_rx)
}

/// The scene loop. Runs until Shutdown or channel disconnect.
fn run_scene_loop(
    config: SceneConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    snap_tx: mpsc::Sender<SceneSnapshot>,
) {
    let mut engine = SceneEngine::new(config);
    let mut next_tick_time = Instant::now();
    tracing::info!(tick_rate = TICK_RATE, "scene loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Scene(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) => {
                    tracing::info!(tick = engine.time().tick, "scene loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Hand the snapshot to the host; a closed receiver ends the loop
        if snap_tx.send(snapshot).is_err() {
            return;
        }

        // 4. Sleep until next tick, adjusting for time_scale
        let time_scale = engine.time_scale();
        let effective_tick_duration = if time_scale > 0.001 {
            TICK_DURATION.div_f32(time_scale)
        } else {
            TICK_DURATION
        };

        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
