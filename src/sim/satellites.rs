use tracing::{debug, trace};

use crate::dynamics::state::{Body, Satellite, SatelliteId, SpriteId};
use crate::math::{Position, Vector};
use super::culling::{cull_reason, spawn_obstruction, CullReason};
use super::integrator::step_body;

/// Result of a spawn request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    Spawned(SatelliteId),
    /// Zero-length initial velocity, or a start point inside a massive
    /// body; nothing was inserted.
    Rejected,
}

/// Culls from one satellite tick, by cause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CullReport {
    pub collided: usize,
    pub escaped: usize,
}

impl CullReport {
    pub fn total(&self) -> usize {
        self.collided + self.escaped
    }

    fn record(&mut self, reason: CullReason) {
        match reason {
            CullReason::Collided { .. } => self.collided += 1,
            CullReason::Escaped => self.escaped += 1,
        }
    }
}

/// Owns the live satellite set.
#[derive(Debug)]
pub struct SatelliteSet {
    live: Vec<Satellite>,
    sprite: SpriteId,
    damping: f64,
    next_id: u64,
}

impl SatelliteSet {
    pub fn new(sprite: SpriteId, damping: f64) -> Self {
        Self { live: Vec::new(), sprite, damping, next_id: 1 }
    }

    /// Insert a massless satellite. A zero initial velocity is rejected, as
    /// is a start point inside (or on the centre of) any of `massive`.
    pub fn spawn(&mut self, pos: Position, vel: Vector, massive: &[Body]) -> SpawnOutcome {
        if vel.norm_squared() == 0.0 {
            debug!(x = pos.x, y = pos.y, "spawn rejected: zero velocity");
            return SpawnOutcome::Rejected;
        }
        if let Some(body) = spawn_obstruction(&pos, massive) {
            debug!(x = pos.x, y = pos.y, body, "spawn rejected: inside massive body");
            return SpawnOutcome::Rejected;
        }
        let id = SatelliteId(self.next_id);
        self.next_id += 1;
        self.live.push(Satellite { id, body: Body::satellite(pos, vel, self.sprite) });
        debug!(id = id.0, x = pos.x, y = pos.y, vx = vel.x, vy = vel.y, "satellite spawned");
        SpawnOutcome::Spawned(id)
    }

    /// Spawn at `press` with velocity `(release - press) / damping`.
    pub fn spawn_from_gesture(
        &mut self,
        press: Position,
        release: Position,
        massive: &[Body],
    ) -> SpawnOutcome {
        let vel = gesture_velocity(&press, &release, self.damping);
        self.spawn(press, vel, massive)
    }

    /// Integrate every live satellite, then rebuild the set from survivors.
    pub fn tick(
        &mut self,
        g: f64,
        massive: &[Body],
        primary: usize,
        escape_distance_sq: f64,
    ) -> CullReport {
        for sat in &mut self.live {
            step_body(&mut sat.body, g, massive, None);
        }

        let primary = &massive[primary];
        let mut report = CullReport::default();
        let mut survivors = Vec::with_capacity(self.live.len());
        for sat in std::mem::take(&mut self.live) {
            match cull_reason(&sat.body, massive, primary, escape_distance_sq) {
                None => survivors.push(sat),
                Some(reason) => {
                    trace!(id = sat.id.0, ?reason, "satellite culled");
                    report.record(reason);
                }
            }
        }
        self.live = survivors;
        report
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Satellite> {
        self.live.iter()
    }

    pub fn sprite(&self) -> SpriteId {
        self.sprite
    }
}

/// Velocity injected by a press-then-release drag.
pub fn gesture_velocity(press: &Position, release: &Position, damping: f64) -> Vector {
    (release - press) / damping
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::{RenderHandle, ESCAPE_DISTANCE_SQ, GRAVITY, SPAWN_DAMPING};

    fn earth() -> Body {
        Body::massive(Position::origin(), Vector::zeros(), 1200.0, 28.0, RenderHandle::Ready(SpriteId(1)))
            .anchored()
    }

    fn set() -> SatelliteSet {
        SatelliteSet::new(SpriteId(0), SPAWN_DAMPING)
    }

    #[test]
    fn gesture_spawn_scales_delta() {
        let mut sats = set();
        let out = sats.spawn_from_gesture(Position::new(0.0, 0.0), Position::new(100.0, 0.0), &[]);
        assert!(matches!(out, SpawnOutcome::Spawned(_)));
        let s = sats.iter().next().unwrap();
        assert_eq!(s.body.pos, Position::new(0.0, 0.0));
        assert_eq!(s.body.vel, Vector::new(10.0, 0.0));
        assert_eq!(s.body.mass, 0.0);
        assert_eq!(s.body.radius, 0.0);
    }

    #[test]
    fn zero_length_gesture_rejected() {
        let mut sats = set();
        let p = Position::new(40.0, 40.0);
        assert_eq!(sats.spawn_from_gesture(p, p, &[earth()]), SpawnOutcome::Rejected);
        assert!(sats.is_empty());
    }

    #[test]
    fn ids_increase() {
        let mut sats = set();
        let a = sats.spawn(Position::new(100.0, 0.0), Vector::new(0.0, 1.0), &[earth()]);
        let b = sats.spawn(Position::new(200.0, 0.0), Vector::new(0.0, 1.0), &[earth()]);
        match (a, b) {
            (SpawnOutcome::Spawned(a), SpawnOutcome::Spawned(b)) => assert!(b > a),
            other => panic!("unexpected outcomes {other:?}"),
        }
    }

    #[test]
    fn spawn_inside_massive_body_rejected() {
        let massive = vec![earth()];
        let mut sats = set();
        // Drag starting on the planet's centre.
        let centre = sats.spawn_from_gesture(Position::origin(), Position::new(50.0, 0.0), &massive);
        let inside = sats.spawn(Position::new(10.0, -10.0), Vector::new(1.0, 0.0), &massive);
        assert_eq!(centre, SpawnOutcome::Rejected);
        assert_eq!(inside, SpawnOutcome::Rejected);
        assert!(sats.is_empty());

        // Nothing left to integrate at zero separation.
        let report = sats.tick(GRAVITY, &massive, 0, ESCAPE_DISTANCE_SQ);
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn tick_culls_collisions_and_escapes() {
        let massive = vec![earth()];
        let mut sats = set();
        // Heading straight into the planet.
        sats.spawn(Position::new(0.0, 35.0), Vector::new(0.0, -10.0), &massive);
        // Already past the escape distance and moving away.
        sats.spawn(Position::new(800.0, 0.0), Vector::new(5.0, 0.0), &massive);
        // Comfortable orbit distance.
        sats.spawn(Position::new(150.0, 0.0), Vector::new(0.0, 1.5), &massive);

        let report = sats.tick(GRAVITY, &massive, 0, ESCAPE_DISTANCE_SQ);
        assert_eq!(report, CullReport { collided: 1, escaped: 1 });
        assert_eq!(sats.len(), 1);
        assert_eq!(sats.iter().next().unwrap().id, SatelliteId(3));
    }

    #[test]
    fn empty_tick_is_noop() {
        let mut sats = set();
        let report = sats.tick(GRAVITY, &[earth()], 0, ESCAPE_DISTANCE_SQ);
        assert_eq!(report.total(), 0);
        assert!(sats.is_empty());
    }
}
