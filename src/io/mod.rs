pub mod csv;
pub mod json;
pub mod recorder;

pub use recorder::{Recorder, Sample};
