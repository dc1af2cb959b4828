use serde::{Deserialize, Serialize};

use crate::math::{Position, Vector};

// ---------------------------------------------------------------------------
// Reference tuning (simulation units, not SI)
// ---------------------------------------------------------------------------

pub const GRAVITY: f64 = 0.3; // gravitational constant of the sandbox
pub const ESCAPE_DISTANCE_SQ: f64 = 500_000.0; // units^2 from the primary
pub const SPAWN_DAMPING: f64 = 10.0; // gesture delta divisor

// ---------------------------------------------------------------------------
// Render handles
// ---------------------------------------------------------------------------

/// Opaque sprite identifier owned by the rendering side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpriteId(pub u32);

impl std::fmt::Display for SpriteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sprite#{}", self.0)
    }
}

/// A sprite that is either usable now or still being loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderHandle {
    Ready(SpriteId),
    Loading(SpriteId),
}

impl RenderHandle {
    pub fn sprite(&self) -> SpriteId {
        match *self {
            RenderHandle::Ready(id) | RenderHandle::Loading(id) => id,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, RenderHandle::Ready(_))
    }
}

// ---------------------------------------------------------------------------
// Bodies
// ---------------------------------------------------------------------------

/// Anything that gravitates or orbits.
/// mass > 0: massive body (pulls others). mass == 0: satellite (pulled only).
#[derive(Debug, Clone)]
pub struct Body {
    pub pos: Position,
    pub vel: Vector,
    pub mass: f64,
    pub radius: f64,
    pub handle: RenderHandle,
    pub anchored: bool, // exerts gravity but is never integrated
}

impl Body {
    pub fn massive(pos: Position, vel: Vector, mass: f64, radius: f64, handle: RenderHandle) -> Self {
        Self { pos, vel, mass, radius, handle, anchored: false }
    }

    pub fn satellite(pos: Position, vel: Vector, sprite: SpriteId) -> Self {
        Self {
            pos,
            vel,
            mass: 0.0,
            radius: 0.0,
            handle: RenderHandle::Ready(sprite),
            anchored: false,
        }
    }

    pub fn anchored(mut self) -> Self {
        self.anchored = true;
        self
    }

    pub fn is_massive(&self) -> bool {
        self.mass > 0.0
    }

    /// Momentum (mass * velocity).
    pub fn momentum(&self) -> Vector {
        self.vel * self.mass
    }
}

/// Stable identity of a spawned satellite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SatelliteId(pub u64);

#[derive(Debug, Clone)]
pub struct Satellite {
    pub id: SatelliteId,
    pub body: Body,
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

/// How massive bodies see each other within one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MassiveUpdate {
    /// All accelerations from the pre-tick state, then applied.
    #[default]
    Snapshot,
    /// Moved one at a time; later bodies see already-moved peers.
    Sequential,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub gravity: f64,
    pub escape_distance_sq: f64,
    pub spawn_damping: f64,
    pub primary: usize,             // index into the massive set
    pub massive_update: MassiveUpdate,
    pub satellite_sprite: SpriteId,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            escape_distance_sq: ESCAPE_DISTANCE_SQ,
            spawn_damping: SPAWN_DAMPING,
            primary: 0,
            massive_update: MassiveUpdate::Snapshot,
            satellite_sprite: SpriteId(0),
        }
    }
}
