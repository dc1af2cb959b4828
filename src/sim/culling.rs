use crate::dynamics::state::Body;
use crate::math::{distance_sq, Position};

/// Why a satellite left the live set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullReason {
    /// Inside the radius of the massive body at this index.
    Collided { body: usize },
    /// At or beyond the escape distance from the primary.
    Escaped,
}

/// Index of the first massive body whose radius strictly contains `body`.
pub fn collision_with(body: &Body, massive: &[Body]) -> Option<usize> {
    massive
        .iter()
        .position(|m| distance_sq(&body.pos, &m.pos) < m.radius * m.radius)
}

pub fn has_collided(body: &Body, massive: &[Body]) -> bool {
    collision_with(body, massive).is_some()
}

/// Massive body a new satellite at `pos` would start inside of, or sit
/// exactly on the centre of. Such a spawn would be integrated at zero
/// separation before it could ever be culled.
pub fn spawn_obstruction(pos: &Position, massive: &[Body]) -> Option<usize> {
    massive.iter().position(|m| {
        let d2 = distance_sq(pos, &m.pos);
        d2 == 0.0 || d2 < m.radius * m.radius
    })
}

pub fn is_out_of_range(satellite: &Body, primary: &Body, escape_distance_sq: f64) -> bool {
    distance_sq(&satellite.pos, &primary.pos) >= escape_distance_sq
}

/// Retention check on a post-move satellite. `None` means keep it.
pub fn cull_reason(
    satellite: &Body,
    massive: &[Body],
    primary: &Body,
    escape_distance_sq: f64,
) -> Option<CullReason> {
    if let Some(body) = collision_with(satellite, massive) {
        return Some(CullReason::Collided { body });
    }
    if is_out_of_range(satellite, primary, escape_distance_sq) {
        return Some(CullReason::Escaped);
    }
    None
}
