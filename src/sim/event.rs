use std::sync::mpsc;

use crate::dynamics::state::SpriteId;
use crate::error::SimError;
use crate::math::{Position, Vector};

// ---------------------------------------------------------------------------
// Inbound events, drained at the start of every tick
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Spawn with an explicit initial state (simulation space).
    Spawn { pos: Position, vel: Vector },
    /// Press-then-release drag, already converted to simulation space.
    Gesture { press: Position, release: Position },
    /// A deferred body sprite finished loading.
    AssetLoaded(SpriteId),
}

/// Cloneable handle for input and asset collaborators.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::Sender<InputEvent>,
}

impl EventSender {
    pub fn send(&self, event: InputEvent) -> Result<(), SimError> {
        self.tx.send(event).map_err(|_| SimError::Disconnected)
    }

    pub fn spawn(&self, pos: Position, vel: Vector) -> Result<(), SimError> {
        self.send(InputEvent::Spawn { pos, vel })
    }

    pub fn gesture(&self, press: Position, release: Position) -> Result<(), SimError> {
        self.send(InputEvent::Gesture { press, release })
    }

    pub fn asset_loaded(&self, sprite: SpriteId) -> Result<(), SimError> {
        self.send(InputEvent::AssetLoaded(sprite))
    }
}

pub(crate) fn channel() -> (EventSender, mpsc::Receiver<InputEvent>) {
    let (tx, rx) = mpsc::channel();
    (EventSender { tx }, rx)
}

// ---------------------------------------------------------------------------
// Scripted input
// ---------------------------------------------------------------------------

/// Events to inject before given ticks, replayed through an `EventSender`.
#[derive(Debug, Clone, Default)]
pub struct Script {
    entries: Vec<(u64, InputEvent)>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `event` so it is drained by tick number `tick` (1-based).
    pub fn at(mut self, tick: u64, event: InputEvent) -> Self {
        self.entries.push((tick, event));
        self.entries.sort_by_key(|(t, _)| *t);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Send every entry scheduled for `tick`.
    pub fn feed(&self, tick: u64, sender: &EventSender) -> Result<usize, SimError> {
        let mut sent = 0;
        for (_, ev) in self.entries.iter().filter(|(t, _)| *t == tick) {
            sender.send(ev.clone())?;
            sent += 1;
        }
        Ok(sent)
    }
}
