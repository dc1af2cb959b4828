use crate::dynamics::state::Body;
use crate::math::Vector;
use crate::physics::gravity::net_acceleration;

// ---------------------------------------------------------------------------
// Semi-implicit Euler, one tick = one time unit
// ---------------------------------------------------------------------------

/// Velocity first, then position with the updated velocity.
pub fn apply(body: &mut Body, accel: Vector) {
    body.vel += accel;
    body.pos += body.vel;
}

/// Advance `body` one tick under every massive body except `exclude`
/// (its own index when `body` is itself in the massive set).
pub fn step_body(body: &mut Body, g: f64, massive: &[Body], exclude: Option<usize>) {
    let accel = net_acceleration(g, massive, &body.pos, exclude);
    apply(body, accel);
}

/// Accelerations of every massive body from the current (pre-tick) state.
/// Anchored bodies get a zero entry.
pub fn massive_accelerations(g: f64, massive: &[Body]) -> Vec<Vector> {
    massive
        .iter()
        .enumerate()
        .map(|(i, b)| {
            if b.anchored {
                Vector::zeros()
            } else {
                net_acceleration(g, massive, &b.pos, Some(i))
            }
        })
        .collect()
}

/// Move all unanchored massive bodies from a single pre-tick snapshot.
pub fn step_massive_snapshot(g: f64, massive: &mut [Body]) {
    let accels = massive_accelerations(g, massive);
    for (body, a) in massive.iter_mut().zip(accels) {
        if !body.anchored {
            apply(body, a);
        }
    }
}

/// Move unanchored massive bodies one after another; each sees peers that
/// have already moved this tick.
pub fn step_massive_sequential(g: f64, massive: &mut [Body]) {
    for i in 0..massive.len() {
        if massive[i].anchored {
            continue;
        }
        let accel = net_acceleration(g, massive, &massive[i].pos, Some(i));
        apply(&mut massive[i], accel);
    }
}
