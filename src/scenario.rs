use crate::dynamics::state::{Body, RenderHandle, SimConfig, SpriteId};
use crate::error::ConfigError;
use crate::math::{Position, Vector};
use crate::sim::event::Script;
use crate::sim::Simulation;

// ---------------------------------------------------------------------------
// Scenario: massive bodies + tuning + optional scripted input
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub bodies: Vec<Body>,
    pub config: SimConfig,
    pub script: Script,
}

impl Scenario {
    pub fn build(&self) -> Result<Simulation, ConfigError> {
        Simulation::new(self.bodies.clone(), self.config.clone())
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }
}

// ---------------------------------------------------------------------------
// Scenario builder
// ---------------------------------------------------------------------------

pub struct ScenarioBuilder {
    name: String,
    bodies: Vec<Body>,
    config: SimConfig,
    script: Script,
}

impl ScenarioBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bodies: vec![],
            config: SimConfig::default(),
            script: Script::new(),
        }
    }

    pub fn body(mut self, body: Body) -> Self {
        self.bodies.push(body);
        self
    }

    pub fn config(mut self, config: SimConfig) -> Self { self.config = config; self }
    pub fn gravity(mut self, g: f64) -> Self { self.config.gravity = g; self }
    pub fn primary(mut self, idx: usize) -> Self { self.config.primary = idx; self }
    pub fn script(mut self, script: Script) -> Self { self.script = script; self }

    pub fn build(self) -> Scenario {
        Scenario {
            name: self.name,
            bodies: self.bodies,
            config: self.config,
            script: self.script,
        }
    }
}

// ---------------------------------------------------------------------------
// Preset scenarios
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    pub const SATELLITE_SPRITE: SpriteId = SpriteId(0);
    pub const EARTH_SPRITE: SpriteId = SpriteId(1);
    pub const MOON_SPRITE: SpriteId = SpriteId(2);

    /// Pinned earth with the moon on a roughly circular orbit.
    pub fn earth_moon() -> Scenario {
        ScenarioBuilder::new("Earth-Moon")
            .body(
                Body::massive(Position::new(0.0, 0.0), Vector::zeros(), 1200.0, 28.0, RenderHandle::Ready(EARTH_SPRITE))
                    .anchored(),
            )
            .body(Body::massive(
                Position::new(0.5, -360.0),
                Vector::new(1.0, 0.0),
                200.0,
                15.0,
                RenderHandle::Ready(MOON_SPRITE),
            ))
            .build()
    }

    /// Two equal free stars with opposite velocities; momentum sums to zero.
    pub fn binary() -> Scenario {
        ScenarioBuilder::new("Binary")
            .body(Body::massive(
                Position::new(-100.0, 0.0),
                Vector::new(0.0, 0.6),
                800.0,
                20.0,
                RenderHandle::Ready(EARTH_SPRITE),
            ))
            .body(Body::massive(
                Position::new(100.0, 0.0),
                Vector::new(0.0, -0.6),
                800.0,
                20.0,
                RenderHandle::Ready(MOON_SPRITE),
            ))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_moon_matches_reference() {
        let s = presets::earth_moon();
        assert_eq!(s.bodies.len(), 2);
        assert!(s.bodies[0].anchored);
        assert!(!s.bodies[1].anchored);
        assert!((s.total_mass() - 1400.0).abs() < 1e-12);
        assert_eq!(s.config.gravity, 0.3);
    }

    #[test]
    fn binary_has_zero_momentum() {
        let s = presets::binary();
        let p = s.bodies.iter().fold(Vector::zeros(), |acc, b| acc + b.momentum());
        assert!(p.norm() < 1e-12);
    }

    #[test]
    fn builder_sets_primary() {
        let s = ScenarioBuilder::new("t")
            .body(Body::massive(Position::origin(), Vector::zeros(), 1.0, 1.0, RenderHandle::Ready(SpriteId(1))))
            .body(Body::massive(Position::new(9.0, 0.0), Vector::zeros(), 1.0, 1.0, RenderHandle::Ready(SpriteId(2))))
            .primary(1)
            .build();
        assert_eq!(s.config.primary, 1);
        let sim = s.build().unwrap();
        assert_eq!(sim.snapshot().orbits[0].body, 0);
    }
}
