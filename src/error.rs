use std::fmt;

use crate::dynamics::state::SpriteId;

/// Failures surfaced by the simulation core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Massive-body sprites still loading; the tick did not advance.
    AssetsPending { remaining: usize },
    /// The simulation side of the event queue is gone.
    Disconnected,
    /// An asset signal named a sprite no massive body uses.
    UnknownSprite(SpriteId),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::AssetsPending { remaining } => {
                write!(f, "waiting on {remaining} body sprite(s) to load")
            }
            SimError::Disconnected => write!(f, "simulation has been torn down"),
            SimError::UnknownSprite(id) => write!(f, "no massive body uses {id}"),
        }
    }
}

impl std::error::Error for SimError {}

/// Failures loading or validating a scenario.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read scenario: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse scenario: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid scenario: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// A renderer could not draw a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError(pub String);

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render failed: {}", self.0)
    }
}

impl std::error::Error for RenderError {}
