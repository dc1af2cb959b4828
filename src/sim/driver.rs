use std::sync::mpsc;

use tracing::{info, trace, warn};

use crate::dynamics::state::{Body, MassiveUpdate, RenderHandle, SatelliteId, SimConfig, SpriteId};
use crate::error::{ConfigError, SimError};
use crate::math::{Position, Vector};
use super::event::{self, EventSender, InputEvent};
use super::integrator::{step_massive_sequential, step_massive_snapshot};
use super::satellites::{CullReport, SatelliteSet, SpawnOutcome};

// ---------------------------------------------------------------------------
// Read-only frame data handed to renderers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct BodyView {
    pub pos: Position,
    pub radius: f64,
    pub sprite: SpriteId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SatelliteView {
    pub id: SatelliteId,
    pub pos: Position,
    pub sprite: SpriteId,
}

/// Path a secondary body is expected to trace around the primary.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitGuide {
    pub body: usize,
    pub centre: Position,
    pub radius: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub tick: u64,
    pub bodies: Vec<BodyView>,
    pub satellites: Vec<SatelliteView>,
    pub orbits: Vec<OrbitGuide>,
    pub satellite_count: usize,
}

/// What one tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    pub spawned: usize,
    pub rejected: usize,
    pub culls: CullReport,
}

/// Spawn requests handled since the last successful tick.
#[derive(Debug, Default)]
struct Drained {
    spawned: usize,
    rejected: usize,
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

/// Owns every body and the inbound queue. One `tick` per frame.
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    massive: Vec<Body>,
    satellites: SatelliteSet,
    orbit_radii: Vec<(usize, f64)>,
    events: mpsc::Receiver<InputEvent>,
    sender: EventSender,
    tick: u64,
    started: bool,
    drained: Drained,
    snapshot: Snapshot,
}

impl Simulation {
    pub fn new(massive: Vec<Body>, config: SimConfig) -> Result<Self, ConfigError> {
        if massive.is_empty() {
            return Err(ConfigError::Invalid("at least one massive body is required".into()));
        }
        if config.primary >= massive.len() {
            return Err(ConfigError::Invalid(format!(
                "primary index {} out of range for {} bodies",
                config.primary,
                massive.len()
            )));
        }
        if let Some(i) = massive.iter().position(|b| !b.is_massive()) {
            return Err(ConfigError::Invalid(format!("body {i} has non-positive mass")));
        }
        if let Some(i) = massive.iter().position(|b| b.radius < 0.0) {
            return Err(ConfigError::Invalid(format!("body {i} has negative radius")));
        }
        if config.spawn_damping <= 0.0 {
            return Err(ConfigError::Invalid("spawn damping must be positive".into()));
        }

        let primary_pos = massive[config.primary].pos;
        let orbit_radii = massive
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != config.primary)
            .map(|(i, b)| (i, (b.pos - primary_pos).norm()))
            .collect();

        let (sender, events) = event::channel();
        let satellites = SatelliteSet::new(config.satellite_sprite, config.spawn_damping);
        let mut sim = Self {
            config,
            massive,
            satellites,
            orbit_radii,
            events,
            sender,
            tick: 0,
            started: false,
            drained: Drained::default(),
            snapshot: Snapshot::default(),
        };
        sim.refresh_snapshot();
        Ok(sim)
    }

    /// Handle for input and asset collaborators.
    pub fn sender(&self) -> EventSender {
        self.sender.clone()
    }

    /// Advance one step. Does nothing past draining events while any
    /// massive-body sprite is still loading. Spawns drained during that wait
    /// are reported by the first tick that runs.
    pub fn tick(&mut self) -> Result<TickReport, SimError> {
        self.drain_events();

        let remaining = self.pending_assets();
        if remaining > 0 {
            return Err(SimError::AssetsPending { remaining });
        }
        if !self.started {
            self.started = true;
            info!(bodies = self.massive.len(), "all body sprites ready, simulation starting");
        }

        let g = self.config.gravity;
        match self.config.massive_update {
            MassiveUpdate::Snapshot => step_massive_snapshot(g, &mut self.massive),
            MassiveUpdate::Sequential => step_massive_sequential(g, &mut self.massive),
        }

        let culls = self.satellites.tick(
            g,
            &self.massive,
            self.config.primary,
            self.config.escape_distance_sq,
        );

        self.tick += 1;
        self.refresh_snapshot();
        let drained = std::mem::take(&mut self.drained);

        trace!(
            tick = self.tick,
            live = self.satellites.len(),
            collided = culls.collided,
            escaped = culls.escaped,
            "tick"
        );

        Ok(TickReport {
            tick: self.tick,
            spawned: drained.spawned,
            rejected: drained.rejected,
            culls,
        })
    }

    fn drain_events(&mut self) {
        while let Ok(ev) = self.events.try_recv() {
            let outcome = match ev {
                InputEvent::Spawn { pos, vel } => self.satellites.spawn(pos, vel, &self.massive),
                InputEvent::Gesture { press, release } => {
                    self.satellites.spawn_from_gesture(press, release, &self.massive)
                }
                InputEvent::AssetLoaded(sprite) => {
                    if let Err(e) = self.mark_loaded(sprite) {
                        warn!(error = %e, "ignoring asset signal");
                    }
                    continue;
                }
            };
            match outcome {
                SpawnOutcome::Spawned(_) => self.drained.spawned += 1,
                SpawnOutcome::Rejected => self.drained.rejected += 1,
            }
        }
    }

    fn mark_loaded(&mut self, sprite: SpriteId) -> Result<(), SimError> {
        let mut found = false;
        for b in self.massive.iter_mut().filter(|b| b.handle.sprite() == sprite) {
            b.handle = RenderHandle::Ready(sprite);
            found = true;
        }
        if found {
            Ok(())
        } else {
            Err(SimError::UnknownSprite(sprite))
        }
    }

    fn refresh_snapshot(&mut self) {
        let primary_pos = self.massive[self.config.primary].pos;
        let snap = &mut self.snapshot;
        snap.tick = self.tick;
        snap.bodies.clear();
        snap.bodies.extend(self.massive.iter().map(|b| BodyView {
            pos: b.pos,
            radius: b.radius,
            sprite: b.handle.sprite(),
        }));
        snap.satellites.clear();
        snap.satellites.extend(self.satellites.iter().map(|s| SatelliteView {
            id: s.id,
            pos: s.body.pos,
            sprite: s.body.handle.sprite(),
        }));
        snap.orbits.clear();
        snap.orbits.extend(self.orbit_radii.iter().map(|&(body, radius)| OrbitGuide {
            body,
            centre: primary_pos,
            radius,
        }));
        snap.satellite_count = self.satellites.len();
    }

    /// Massive bodies whose sprite has not arrived yet.
    pub fn pending_assets(&self) -> usize {
        self.massive.iter().filter(|b| !b.handle.is_ready()).count()
    }

    pub fn is_ready(&self) -> bool {
        self.pending_assets() == 0
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn massive_bodies(&self) -> &[Body] {
        &self.massive
    }

    pub fn satellites(&self) -> &SatelliteSet {
        &self.satellites
    }

    pub fn satellite_count(&self) -> usize {
        self.satellites.len()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Mass-weighted mean position of the massive set.
    pub fn centre_of_mass(&self) -> Position {
        let total: f64 = self.massive.iter().map(|b| b.mass).sum();
        let weighted = self
            .massive
            .iter()
            .fold(Vector::zeros(), |acc, b| acc + b.pos.coords * b.mass);
        Position::from(weighted / total)
    }
}
