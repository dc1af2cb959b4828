use orbit_sandbox::math::{Position, Vector};
use orbit_sandbox::physics::gravity::acceleration;
use orbit_sandbox::scenario::{presets, ScenarioBuilder};
use orbit_sandbox::sim::{FrameBudget, FrameLoop, NullRenderer, Simulation};
use orbit_sandbox::types::{Body, MassiveUpdate, RenderHandle, SpriteId, ESCAPE_DISTANCE_SQ};
use orbit_sandbox::SimError;

fn planet(x: f64, y: f64, mass: f64, radius: f64) -> Body {
    Body::massive(Position::new(x, y), Vector::zeros(), mass, radius, RenderHandle::Ready(SpriteId(1)))
}

/// One anchored planet at the origin and no gravity, so a satellite's
/// post-move position is exactly `pos + vel`.
fn inert_world(radius: f64) -> Simulation {
    ScenarioBuilder::new("inert")
        .body(planet(0.0, 0.0, 1000.0, radius).anchored())
        .gravity(0.0)
        .build()
        .build()
        .unwrap()
}

#[test]
fn massive_body_excludes_itself() {
    let g = 0.3;
    let bodies = vec![
        planet(0.0, 0.0, 900.0, 10.0),
        planet(120.0, 30.0, 300.0, 8.0),
        planet(-80.0, 200.0, 150.0, 6.0),
    ];
    let expected: Vec<Vector> = (0..3)
        .map(|i| {
            (0..3)
                .filter(|&j| j != i)
                .fold(Vector::zeros(), |acc, j| acc + acceleration(g, &bodies[j], &bodies[i].pos))
        })
        .collect();

    let mut sim = ScenarioBuilder::new("trio")
        .body(bodies[0].clone())
        .body(bodies[1].clone())
        .body(bodies[2].clone())
        .gravity(g)
        .build()
        .build()
        .unwrap();
    sim.tick().unwrap();

    for (i, b) in sim.massive_bodies().iter().enumerate() {
        assert!((b.vel - expected[i]).norm() < 1e-15, "body {i} velocity {:?}", b.vel);
    }
}

#[test]
fn lone_body_is_unaffected() {
    let mut sim = ScenarioBuilder::new("alone")
        .body(Body::massive(Position::new(5.0, 5.0), Vector::new(0.25, 0.0), 500.0, 10.0, RenderHandle::Ready(SpriteId(1))))
        .build()
        .build()
        .unwrap();
    for _ in 0..100 {
        sim.tick().unwrap();
    }
    let b = &sim.massive_bodies()[0];
    assert_eq!(b.vel, Vector::new(0.25, 0.0));
    assert!((b.pos - Position::new(30.0, 5.0)).norm() < 1e-9);
}

#[test]
fn binary_centre_of_mass_is_fixed() {
    let mut sim = presets::binary().build().unwrap();
    assert_eq!(sim.config().massive_update, MassiveUpdate::Snapshot);
    let com0 = sim.centre_of_mass();
    for _ in 0..5000 {
        sim.tick().unwrap();
    }
    let drift = (sim.centre_of_mass() - com0).norm();
    assert!(drift < 1e-9, "centre of mass drifted {drift}");

    let sep = (sim.massive_bodies()[0].pos - sim.massive_bodies()[1].pos).norm();
    assert!(sep > 50.0 && sep < 250.0, "binary came apart: separation {sep}");
}

#[test]
fn collision_boundary_on_tick() {
    let r2 = 28.0_f64 * 28.0;
    let eps = 1e-3;
    let mut sim = inert_world(28.0);
    let tx = sim.sender();
    let inside = (r2 - eps).sqrt();
    let outside = (r2 + eps).sqrt();
    // Both start outside the radius and move one unit inward.
    tx.spawn(Position::new(inside + 1.0, 0.0), Vector::new(-1.0, 0.0)).unwrap();
    tx.spawn(Position::new(0.0, outside + 1.0), Vector::new(0.0, -1.0)).unwrap();

    let report = sim.tick().unwrap();
    assert_eq!(report.culls.collided, 1);
    assert_eq!(sim.satellite_count(), 1);
    let survivor = sim.satellites().iter().next().unwrap();
    assert!(survivor.body.pos.y > 0.0);
}

#[test]
fn escape_boundary_on_tick() {
    let limit = ESCAPE_DISTANCE_SQ;
    let mut sim = inert_world(28.0);
    let tx = sim.sender();
    tx.spawn(Position::new((limit + 1.0).sqrt() - 1.0, 0.0), Vector::new(1.0, 0.0)).unwrap();
    tx.spawn(Position::new((limit - 1.0).sqrt() - 1.0, 0.0), Vector::new(1.0, 0.0)).unwrap();

    let report = sim.tick().unwrap();
    assert_eq!(report.culls.escaped, 1);
    assert_eq!(sim.satellite_count(), 1);
    let survivor = sim.satellites().iter().next().unwrap();
    assert!(survivor.body.pos.x * survivor.body.pos.x < limit);
}

#[test]
fn gesture_spawn_state() {
    let mut sim = ScenarioBuilder::new("offset primary")
        .body(planet(300.0, 0.0, 1000.0, 10.0).anchored())
        .gravity(0.0)
        .build()
        .build()
        .unwrap();
    sim.sender().gesture(Position::new(0.0, 0.0), Position::new(100.0, 0.0)).unwrap();
    sim.tick().unwrap();

    let sat = sim.satellites().iter().next().unwrap();
    assert_eq!(sat.body.vel, Vector::new(10.0, 0.0));
    // Spawned at the press point, then moved once.
    assert_eq!(sat.body.pos, Position::new(10.0, 0.0));
    assert_eq!(sat.body.mass, 0.0);
}

#[test]
fn empty_ticks_only_move_massive_bodies() {
    let mut sim = presets::earth_moon().build().unwrap();
    let moon0 = sim.massive_bodies()[1].pos;
    let mut frame_loop = FrameLoop::new();
    let stats = frame_loop.run(&mut sim, &mut FrameBudget::new(1000), &mut NullRenderer).clone();

    assert_eq!(stats.ticks, 1000);
    assert_eq!(stats.tick_errors, 0);
    assert_eq!(sim.satellite_count(), 0);
    assert_eq!(sim.snapshot().satellites.len(), 0);
    assert_eq!(sim.massive_bodies()[0].pos, Position::origin());
    assert_ne!(sim.massive_bodies()[1].pos, moon0);
}

#[test]
fn moon_orbit_stays_near_circular() {
    let mut sim = presets::earth_moon().build().unwrap();
    for _ in 0..5000 {
        sim.tick().unwrap();
        let r = sim.massive_bodies()[1].pos.coords.norm();
        assert!(r > 330.0 && r < 390.0, "moon radius {r} at tick {}", sim.tick_count());
    }
}

#[test]
fn culling_keeps_exactly_the_survivors() {
    let mut sim = presets::earth_moon().build().unwrap();
    let tx = sim.sender();
    // Survivors: slow orbits well clear of both bodies.
    tx.spawn(Position::new(150.0, 0.0), Vector::new(0.0, 1.5)).unwrap();
    tx.spawn(Position::new(-200.0, 0.0), Vector::new(0.0, -1.2)).unwrap();
    tx.spawn(Position::new(0.0, 200.0), Vector::new(1.2, 0.0)).unwrap();
    // Into earth.
    tx.spawn(Position::new(0.0, 30.0), Vector::new(0.0, -5.0)).unwrap();
    // Into the moon.
    tx.spawn(Position::new(0.5, -340.0), Vector::new(0.0, -10.0)).unwrap();
    // Beyond escape range.
    tx.spawn(Position::new(0.0, 750.0), Vector::new(0.0, 1.0)).unwrap();

    let report = sim.tick().unwrap();
    assert_eq!(report.spawned, 6);
    assert_eq!(report.culls.collided, 2);
    assert_eq!(report.culls.escaped, 1);
    assert_eq!(sim.satellite_count(), 3);

    let ids: Vec<u64> = sim.satellites().iter().map(|s| s.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    let snap_ids: Vec<u64> = sim.snapshot().satellites.iter().map(|s| s.id.0).collect();
    assert_eq!(snap_ids, ids);
}

#[test]
fn spawn_on_body_centre_is_rejected_without_stopping_the_loop() {
    let mut sim = presets::earth_moon().build().unwrap();
    let tx = sim.sender();
    tx.gesture(Position::origin(), Position::new(50.0, 0.0)).unwrap();
    tx.spawn(Position::new(0.5, -355.0), Vector::new(1.0, 0.0)).unwrap();
    tx.gesture(Position::new(150.0, 0.0), Position::new(150.0, 15.0)).unwrap();

    let mut lp = FrameLoop::new();
    let stats = lp.run(&mut sim, &mut FrameBudget::new(3), &mut NullRenderer);
    assert_eq!(stats.ticks, 3);
    assert_eq!(stats.spawned, 1);
    assert_eq!(stats.rejected, 2);
    assert_eq!(stats.collided, 0);
    assert_eq!(sim.satellite_count(), 1);
}

#[test]
fn spawns_queued_while_assets_load_run_on_first_tick() {
    let mut scenario = presets::earth_moon();
    for b in &mut scenario.bodies {
        b.handle = RenderHandle::Loading(b.handle.sprite());
    }
    let mut sim = scenario.build().unwrap();
    let tx = sim.sender();
    tx.gesture(Position::new(150.0, 0.0), Position::new(150.0, 15.0)).unwrap();

    let mut lp = FrameLoop::new();
    lp.run(&mut sim, &mut FrameBudget::new(2), &mut NullRenderer);
    assert_eq!(lp.stats().waiting_frames, 2);
    assert_eq!(sim.tick_count(), 0);
    // Held in place until the first real tick.
    let held = sim.satellites().iter().next().unwrap().body.pos;
    assert_eq!(held, Position::new(150.0, 0.0));

    for b in &scenario.bodies {
        tx.asset_loaded(b.handle.sprite()).unwrap();
    }
    let stats = lp.run(&mut sim, &mut FrameBudget::new(1), &mut NullRenderer);
    assert_eq!(stats.ticks, 1);
    assert_eq!(stats.spawned, 1);
    let sat = sim.satellites().iter().next().unwrap();
    assert!(sat.body.pos.y > 1.0, "satellite should have moved: {:?}", sat.body.pos);
}

#[test]
fn teardown_disconnects_senders() {
    let sim = presets::earth_moon().build().unwrap();
    let tx = sim.sender();
    drop(sim);
    assert_eq!(tx.gesture(Position::origin(), Position::new(1.0, 0.0)), Err(SimError::Disconnected));
}
