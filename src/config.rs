//! Scenario files.
//!
//! A scenario is a TOML document:
//!
//! ```toml
//! name = "Earth-Moon"
//!
//! [sim]                      # every key optional, reference defaults apply
//! gravity = 0.3
//! escape_distance_sq = 500000.0
//! spawn_damping = 10.0
//! primary = 0
//! massive_update = "snapshot" # or "sequential"
//! satellite_sprite = 0
//!
//! [[bodies]]
//! position = [0.0, 0.0]
//! velocity = [0.0, 0.0]
//! mass = 1200.0
//! radius = 28.0
//! sprite = 1
//! anchored = true
//!
//! [[spawns]]                 # replayed as drag gestures before `tick`
//! tick = 1
//! press = [150.0, 0.0]
//! release = [150.0, 15.0]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::dynamics::state::{Body, RenderHandle, SimConfig, SpriteId};
use crate::error::ConfigError;
use crate::math::{Position, Vector};
use crate::scenario::Scenario;
use crate::sim::event::{InputEvent, Script};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub position: [f64; 2],
    #[serde(default)]
    pub velocity: [f64; 2],
    pub mass: f64,
    pub radius: f64,
    pub sprite: SpriteId,
    #[serde(default)]
    pub anchored: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpawnConfig {
    pub tick: u64,
    pub press: [f64; 2],
    pub release: [f64; 2],
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub sim: SimConfig,
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub spawns: Vec<SpawnConfig>,
}

fn default_name() -> String {
    "unnamed".into()
}

impl ScenarioConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let cfg: ScenarioConfig = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bodies.is_empty() {
            return Err(ConfigError::Invalid("no [[bodies]] defined".into()));
        }
        for (i, b) in self.bodies.iter().enumerate() {
            if !(b.mass > 0.0) {
                return Err(ConfigError::Invalid(format!("body {i}: mass must be positive")));
            }
            if b.radius < 0.0 {
                return Err(ConfigError::Invalid(format!("body {i}: radius must be non-negative")));
            }
        }
        if self.sim.primary >= self.bodies.len() {
            return Err(ConfigError::Invalid(format!(
                "sim.primary = {} but only {} bodies",
                self.sim.primary,
                self.bodies.len()
            )));
        }
        if !(self.sim.spawn_damping > 0.0) {
            return Err(ConfigError::Invalid("sim.spawn_damping must be positive".into()));
        }
        if let Some(s) = self.spawns.iter().find(|s| s.tick == 0) {
            return Err(ConfigError::Invalid(format!(
                "spawn at [{}, {}] has tick 0; ticks start at 1",
                s.press[0], s.press[1]
            )));
        }
        Ok(())
    }

    pub fn into_scenario(self) -> Scenario {
        let bodies = self
            .bodies
            .iter()
            .map(|b| {
                let body = Body::massive(
                    Position::new(b.position[0], b.position[1]),
                    Vector::new(b.velocity[0], b.velocity[1]),
                    b.mass,
                    b.radius,
                    RenderHandle::Ready(b.sprite),
                );
                if b.anchored { body.anchored() } else { body }
            })
            .collect();

        let script = self.spawns.iter().fold(Script::new(), |script, s| {
            script.at(
                s.tick,
                InputEvent::Gesture {
                    press: Position::new(s.press[0], s.press[1]),
                    release: Position::new(s.release[0], s.release[1]),
                },
            )
        });

        Scenario { name: self.name, bodies, config: self.sim, script }
    }
}
