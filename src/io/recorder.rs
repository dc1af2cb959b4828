use crate::error::RenderError;
use crate::sim::{Renderer, Snapshot};

/// One recorded frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub tick: u64,
    pub satellites: usize,
    pub bodies: Vec<[f64; 2]>, // massive-body positions, set order
}

/// Renderer that keeps a sample every `every` ticks instead of drawing.
#[derive(Debug, Clone)]
pub struct Recorder {
    every: u64,
    samples: Vec<Sample>,
}

impl Recorder {
    pub fn new(every: u64) -> Self {
        Self { every: every.max(1), samples: Vec::new() }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl Renderer for Recorder {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), RenderError> {
        if snapshot.tick % self.every == 0 {
            self.samples.push(Sample {
                tick: snapshot.tick,
                satellites: snapshot.satellite_count,
                bodies: snapshot.bodies.iter().map(|b| [b.pos.x, b.pos.y]).collect(),
            });
        }
        Ok(())
    }
}
