use nalgebra::{Point2, Vector2};

// ---------------------------------------------------------------------------
// Simulation-space primitives
// ---------------------------------------------------------------------------

/// Displacement or velocity (dx, dy).
pub type Vector = Vector2<f64>;

/// Location in simulation space (x, y).
/// `Position - Position` yields a `Vector`, `Position + Vector` a `Position`.
pub type Position = Point2<f64>;

/// Squared distance between two positions.
pub fn distance_sq(a: &Position, b: &Position) -> f64 {
    (a - b).norm_squared()
}

// ---------------------------------------------------------------------------
// Screen <-> simulation mapping
// ---------------------------------------------------------------------------

/// Maps device coordinates (origin top-left, y down) to simulation space
/// (origin at viewport centre, y up) and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn to_screen(&self, p: &Position) -> Position {
        Position::new(p.x + self.width / 2.0, -p.y + self.height / 2.0)
    }

    pub fn from_screen(&self, s: &Position) -> Position {
        Position::new(s.x - self.width / 2.0, -s.y + self.height / 2.0)
    }

    /// Screen position of the simulation origin.
    pub fn centre(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }
}
