use glam::Vec3;
use soft_lattice::{CarrierBody, DeformableBody, ParticleSystem, SoftBody};

fn main() {
    // A ten-particle chain, stretched at one end, falling under a uniform
    // carrier acceleration.
    let mut points = Vec::new();
    for i in 0..10 {
        points.extend_from_slice(&[i as f32 * 0.2, 0.0, 0.0]);
    }
    let masses = vec![0.1; 10];
    let links: Vec<[usize; 2]> = (0..9).map(|i| [i, i + 1]).collect();
    let springs = vec![80.0; 9];
    let dampers = vec![1.0; 9];

    let system = ParticleSystem::build(&points, 3, &masses, &links, &springs, &dampers)
        .expect("chain should build");
    let mut body = SoftBody::new(system, CarrierBody::default());
    body.system.set_position(9, Vec3::new(2.2, 0.0, 0.0));

    let dt = 1.0 / 60.0;
    for _ in 0..120 {
        body.carrier.apply_force(Vec3::new(0.0, -9.81, 0.0));
        body.advance(dt);
    }

    println!(
        "after 2 s: head {:?}, tail {:?}, tail speed {:.3}",
        body.positions()[0],
        body.positions()[9],
        body.velocities()[9].length()
    );
}
