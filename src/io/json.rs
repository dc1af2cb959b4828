use std::io::{self, Write};

use serde::Serialize;

use crate::sim::{RunStats, Simulation};

/// End-of-run report.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub scenario: String,
    pub ticks: u64,
    pub final_satellites: usize,
    pub centre_of_mass: [f64; 2],
    pub bodies: Vec<BodySummary>,
    pub stats: RunStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct BodySummary {
    pub position: [f64; 2],
    pub velocity: [f64; 2],
    pub mass: f64,
    pub anchored: bool,
}

impl RunSummary {
    pub fn collect(scenario: &str, sim: &Simulation, stats: &RunStats) -> Self {
        let com = sim.centre_of_mass();
        RunSummary {
            scenario: scenario.to_string(),
            ticks: sim.tick_count(),
            final_satellites: sim.satellite_count(),
            centre_of_mass: [com.x, com.y],
            bodies: sim
                .massive_bodies()
                .iter()
                .map(|b| BodySummary {
                    position: [b.pos.x, b.pos.y],
                    velocity: [b.vel.x, b.vel.y],
                    mass: b.mass,
                    anchored: b.anchored,
                })
                .collect(),
            stats: stats.clone(),
        }
    }
}

/// Write the summary as pretty JSON.
pub fn write_summary<W: Write>(writer: &mut W, summary: &RunSummary) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, summary)?;
    writeln!(writer)
}

/// Write summary JSON to a file.
pub fn write_summary_file(path: &str, summary: &RunSummary) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, summary)
}
