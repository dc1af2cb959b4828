use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use orbit_sandbox::config::ScenarioConfig;
use orbit_sandbox::io::{csv, json, Recorder};
use orbit_sandbox::scenario::{presets, Scenario};
use orbit_sandbox::sim::{FrameBudget, FrameLoop};
use orbit_sandbox::telemetry;

/// Headless runner: advance a scenario a fixed number of frames.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Scenario TOML; the earth-moon preset when omitted.
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Frames to run (one tick per frame).
    #[arg(short, long, default_value_t = 3600)]
    ticks: u64,

    /// Keep a sample every N ticks for CSV export.
    #[arg(long, default_value_t = 60)]
    sample_every: u64,

    /// Write sampled trajectory CSV here.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write run summary JSON here.
    #[arg(long)]
    json: Option<PathBuf>,
}

fn load_scenario(path: Option<&PathBuf>) -> Result<Scenario> {
    match path {
        Some(p) => {
            let cfg = ScenarioConfig::load(p)
                .with_context(|| format!("loading scenario {}", p.display()))?;
            Ok(cfg.into_scenario())
        }
        None => Ok(presets::earth_moon()),
    }
}

fn main() -> Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    telemetry::init_tracing();

    let args = Args::parse();
    let scenario = load_scenario(args.scenario.as_ref())?;
    let mut sim = scenario.build().context("building simulation")?;
    info!(scenario = %scenario.name, ticks = args.ticks, spawns = scenario.script.len(), "running");

    let mut recorder = Recorder::new(args.sample_every);
    let mut frame_loop = FrameLoop::with_script(scenario.script.clone());
    let stats = frame_loop
        .run(&mut sim, &mut FrameBudget::new(args.ticks), &mut recorder)
        .clone();

    let summary = json::RunSummary::collect(&scenario.name, &sim, &stats);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  ORBIT SANDBOX — {}", scenario.name);
    println!("====================================================================");
    println!();
    println!("  Massive Bodies");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>3}  {:>10}  {:>10}  {:>8}  {:>8}  {:>8}",
        "#", "x", "y", "speed", "mass", "anchor"
    );
    for (i, b) in sim.massive_bodies().iter().enumerate() {
        println!(
            "  {:>3}  {:>10.2}  {:>10.2}  {:>8.4}  {:>8.1}  {:>8}",
            i,
            b.pos.x,
            b.pos.y,
            b.vel.norm(),
            b.mass,
            if b.anchored { "yes" } else { "no" }
        );
    }
    println!();
    println!("  Satellites");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Spawned:       {:>8}     Rejected:     {:>8}", stats.spawned, stats.rejected);
    println!("  Collided:      {:>8}     Escaped:      {:>8}", stats.collided, stats.escaped);
    println!("  Peak live:     {:>8}     Final live:   {:>8}", stats.peak_satellites, sim.satellite_count());
    println!();
    println!(
        "  Simulation: {} frames, {} ticks, {} render errors",
        stats.frames, stats.ticks, stats.render_errors
    );
    println!("====================================================================");
    println!();

    if let Some(path) = &args.csv {
        csv::write_samples_file(&path.to_string_lossy(), recorder.samples())
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), samples = recorder.samples().len(), "wrote csv");
    }
    if let Some(path) = &args.json {
        json::write_summary_file(&path.to_string_lossy(), &summary)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "wrote summary");
    }

    Ok(())
}
