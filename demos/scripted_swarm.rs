use orbit_sandbox::io::Recorder;
use orbit_sandbox::math::Position;
use orbit_sandbox::scenario::presets;
use orbit_sandbox::sim::{FrameBudget, FrameLoop, InputEvent, Script};

/// Launch a ring of satellites from the same altitude at different speeds and
/// watch which ones survive an hour of frames.
fn main() {
    let mut script = Script::new();
    for (i, speed) in [8.0, 12.0, 15.0, 18.0, 22.0, 30.0, 45.0].iter().enumerate() {
        let press = Position::new(150.0, 0.0);
        let release = Position::new(150.0, *speed);
        script = script.at(1 + i as u64 * 10, InputEvent::Gesture { press, release });
    }

    let scenario = presets::earth_moon();
    let mut sim = scenario.build().expect("preset is valid");
    let mut recorder = Recorder::new(300);
    let mut frame_loop = FrameLoop::with_script(script);
    let stats = frame_loop.run(&mut sim, &mut FrameBudget::new(3600), &mut recorder).clone();

    println!("Scenario: {}", scenario.name);
    println!("Spawned {} | collided {} | escaped {}", stats.spawned, stats.collided, stats.escaped);
    for s in recorder.samples() {
        println!("  tick {:>5}: {:>2} live", s.tick, s.satellites);
    }
    println!("Survivors after {} ticks: {}", sim.tick_count(), sim.satellite_count());
}
