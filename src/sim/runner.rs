use serde::Serialize;
use tracing::{debug, error, warn};

use crate::error::{RenderError, SimError};
use super::driver::{Simulation, Snapshot, TickReport};
use super::event::Script;

// ---------------------------------------------------------------------------
// Collaborator seams
// ---------------------------------------------------------------------------

/// Host-side frame source. Returning `false` declines the next frame and
/// stops the loop.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> bool;
}

/// Consumes the read-only snapshot after each tick.
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), RenderError>;
}

/// Accepts a fixed number of frames, then declines.
#[derive(Debug, Clone)]
pub struct FrameBudget {
    remaining: u64,
}

impl FrameBudget {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }
}

impl FrameScheduler for FrameBudget {
    fn request_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Renderer that draws nothing.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _snapshot: &Snapshot) -> Result<(), RenderError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Frame loop
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub frames: u64,
    pub ticks: u64,
    pub waiting_frames: u64,
    pub tick_errors: u64,
    pub render_errors: u64,
    pub spawned: u64,
    pub rejected: u64,
    pub collided: u64,
    pub escaped: u64,
    pub peak_satellites: usize,
}

impl RunStats {
    fn absorb(&mut self, r: &TickReport, live: usize) {
        self.ticks += 1;
        self.spawned += r.spawned as u64;
        self.rejected += r.rejected as u64;
        self.collided += r.culls.collided as u64;
        self.escaped += r.culls.escaped as u64;
        self.peak_satellites = self.peak_satellites.max(live);
    }
}

/// Drives a simulation one tick per granted frame. Failures inside a frame
/// are logged and the next frame is still requested.
#[derive(Debug, Default)]
pub struct FrameLoop {
    script: Script,
    fed_through: u64,
    stats: RunStats,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(script: Script) -> Self {
        Self { script, ..Self::default() }
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// One frame: feed scripted input, tick, hand the snapshot over.
    pub fn frame(&mut self, sim: &mut Simulation, renderer: &mut dyn Renderer) {
        self.stats.frames += 1;

        let upcoming = sim.tick_count() + 1;
        if upcoming > self.fed_through {
            if let Err(e) = self.script.feed(upcoming, &sim.sender()) {
                error!(error = %e, tick = upcoming, "failed to feed scripted input");
            }
            self.fed_through = upcoming;
        }

        match sim.tick() {
            Ok(report) => {
                self.stats.absorb(&report, sim.satellite_count());
                if let Err(e) = renderer.render(sim.snapshot()) {
                    self.stats.render_errors += 1;
                    warn!(error = %e, tick = report.tick, "frame dropped");
                }
            }
            Err(SimError::AssetsPending { remaining }) => {
                self.stats.waiting_frames += 1;
                debug!(remaining, "waiting for body sprites");
            }
            Err(e) => {
                self.stats.tick_errors += 1;
                error!(error = %e, "tick failed");
            }
        }
    }

    /// Self-rescheduling loop: ask for a frame, run it, ask again.
    pub fn run(
        &mut self,
        sim: &mut Simulation,
        scheduler: &mut dyn FrameScheduler,
        renderer: &mut dyn Renderer,
    ) -> &RunStats {
        while scheduler.request_frame() {
            self.frame(sim, renderer);
        }
        &self.stats
    }
}
