pub mod config;
pub mod dynamics;
pub mod error;
pub mod io;
pub mod math;
pub mod physics;
pub mod scenario;
pub mod sim;
pub mod telemetry;

pub use error::{ConfigError, RenderError, SimError};
pub use scenario::{presets, Scenario, ScenarioBuilder};
pub use sim::Simulation;

// Flat re-exports for the common types
pub mod types {
    pub use crate::dynamics::state::{
        Body, MassiveUpdate, RenderHandle, SatelliteId, SimConfig, SpriteId,
        ESCAPE_DISTANCE_SQ, GRAVITY, SPAWN_DAMPING,
    };
    pub use crate::math::{Position, Vector, Viewport};
}
