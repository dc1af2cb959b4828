pub mod culling;
pub mod driver;
pub mod event;
pub mod integrator;
pub mod runner;
pub mod satellites;

pub use driver::{BodyView, OrbitGuide, SatelliteView, Simulation, Snapshot, TickReport};
pub use event::{EventSender, InputEvent, Script};
pub use runner::{FrameBudget, FrameLoop, FrameScheduler, NullRenderer, Renderer, RunStats};
pub use satellites::{CullReport, SatelliteSet, SpawnOutcome};
