pub mod state;

pub use state::{Body, MassiveUpdate, RenderHandle, Satellite, SatelliteId, SimConfig, SpriteId};
