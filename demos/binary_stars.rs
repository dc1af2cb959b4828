use orbit_sandbox::scenario::presets;
use orbit_sandbox::sim::{FrameBudget, FrameLoop, NullRenderer};
use orbit_sandbox::types::MassiveUpdate;

/// Compare the two massive-body update policies on a free binary.
fn main() {
    for policy in [MassiveUpdate::Snapshot, MassiveUpdate::Sequential] {
        let mut scenario = presets::binary();
        scenario.config.massive_update = policy;
        let mut sim = scenario.build().expect("preset is valid");
        let com0 = sim.centre_of_mass();

        FrameLoop::new().run(&mut sim, &mut FrameBudget::new(5000), &mut NullRenderer);

        let drift = (sim.centre_of_mass() - com0).norm();
        let sep = (sim.massive_bodies()[0].pos - sim.massive_bodies()[1].pos).norm();
        println!("{:?}: centre-of-mass drift {:.3e}, separation {:.2}", policy, drift, sep);
    }
}
