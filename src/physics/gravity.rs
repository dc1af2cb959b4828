use crate::dynamics::state::Body;
use crate::math::{Position, Vector};

/// Inverse-square pull of `source` on a point at `towards`.
///
/// Points from `towards` to `source`, magnitude `g * m / r^2`.
///
/// # Panics
/// If `towards` coincides with `source.pos`. The cull step removes anything
/// that close before the next force evaluation, so reaching this is an
/// ordering bug in the caller.
pub fn acceleration(g: f64, source: &Body, towards: &Position) -> Vector {
    let dir = source.pos - towards;
    let r2 = dir.norm_squared();
    assert!(
        r2 > 0.0,
        "degenerate gravity evaluation: target coincides with source at ({}, {})",
        source.pos.x,
        source.pos.y
    );
    let mag = g * source.mass / r2;
    dir.normalize() * mag
}

/// Summed pull of every massive body on `towards`, skipping index `exclude`.
pub fn net_acceleration(
    g: f64,
    massive: &[Body],
    towards: &Position,
    exclude: Option<usize>,
) -> Vector {
    massive
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != exclude)
        .fold(Vector::zeros(), |acc, (_, m)| acc + acceleration(g, m, towards))
}
