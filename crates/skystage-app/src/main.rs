//! skystage: headless scene runner.
//!
//! Usage:
//!   skystage [--seed <n>] [--ticks <n>] [--every <n>] [--config <path>]
//!
//! Runs the presentation scene for a fixed number of ticks and prints
//! every Nth snapshot as a JSON line on stdout.

use std::process;
use std::sync::mpsc;

use skystage_app::scene_loop::{spawn_scene_loop, LoopCommand};
use skystage_core::commands::SceneCommand;
use skystage_core::config::SceneConfig;

struct Args {
    seed: u64,
    ticks: u64,
    every: u64,
    config_path: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            process::exit(1);
        }
    };

    let mut config = match &args.config_path {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(message) => {
                eprintln!("{message}");
                process::exit(1);
            }
        },
        None => SceneConfig::default(),
    };
    config.seed = args.seed;

    let (cmd_tx, snap_rx) = spawn_scene_loop(config);
    let commands = [
        SceneCommand::Start,
        SceneCommand::StartTagReveal,
    ];
    for cmd in commands {
        if cmd_tx.send(LoopCommand::Scene(cmd)).is_err() {
            eprintln!("scene loop exited early");
            process::exit(1);
        }
    }

    if let Err(message) = stream_snapshots(&snap_rx, args.ticks, args.every) {
        eprintln!("{message}");
        process::exit(1);
    }

    let _ = cmd_tx.send(LoopCommand::Shutdown);
}

fn stream_snapshots(
    snap_rx: &mpsc::Receiver<skystage_core::state::SceneSnapshot>,
    ticks: u64,
    every: u64,
) -> Result<(), String> {
    let mut received = 0u64;
    while received < ticks {
        let snapshot = snap_rx
            .recv()
            .map_err(|_| "scene loop disconnected".to_string())?;
        received += 1;
        if received % every == 0 || received == ticks {
            let json = serde_json::to_string(&snapshot)
                .map_err(|e| format!("failed to serialize snapshot: {e}"))?;
            println!("{json}");
        }
    }
    Ok(())
}

fn load_config(path: &str) -> Result<SceneConfig, String> {
    let text =
        std::fs::read_to_string(path).map_err(|e| format!("cannot read config {path}: {e}"))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid config {path}: {e}"))
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        seed: 42,
        ticks: 600,
        every: 60,
        config_path: None,
    };

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let mut i = 0;
    while i < raw.len() {
        match raw[i].as_str() {
            "--seed" => args.seed = parse_value(&raw, &mut i, "--seed")?,
            "--ticks" => args.ticks = parse_value(&raw, &mut i, "--ticks")?,
            "--every" => {
                args.every = parse_value(&raw, &mut i, "--every")?;
                if args.every == 0 {
                    return Err("--every must be at least 1".into());
                }
            }
            "--config" => {
                i += 1;
                args.config_path = Some(
                    raw.get(i)
                        .ok_or("--config requires a path")?
                        .clone(),
                );
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }
    Ok(args)
}

fn parse_value(raw: &[String], i: &mut usize, flag: &str) -> Result<u64, String> {
    *i += 1;
    raw.get(*i)
        .ok_or(format!("{flag} requires a value"))?
        .parse()
        .map_err(|_| format!("{flag} requires an integer"))
}

fn print_usage() {
    eprintln!(
        "skystage: headless presentation-scene runner\n\
         \n\
         Options:\n\
           --seed <n>      RNG seed (default: 42)\n\
           --ticks <n>     Ticks to run (default: 600)\n\
           --every <n>     Print every Nth snapshot (default: 60)\n\
           --config <path> Scene config JSON (default: built-in scene)\n"
    );
}
