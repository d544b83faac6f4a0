use approx::assert_relative_eq;
use glam::{Mat3, Vec3};
use soft_lattice::{
    CarrierBody, ContactCoupling, ContactSet, FreeSpace, Integrator, ParticleSystem,
};

/// Two particles on the x axis, one link of rest length 1.
fn pair(mass: f32, spring: f32, damper: f32) -> ParticleSystem {
    let points = [
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0,
    ];
    ParticleSystem::build(&points, 3, &[mass, mass], &[[0, 1]], &[spring], &[damper]).unwrap()
}

fn separation(system: &ParticleSystem) -> f32 {
    system.positions()[0].distance(system.positions()[1])
}

fn momentum(system: &ParticleSystem) -> Vec3 {
    system
        .velocities()
        .iter()
        .zip(system.masses())
        .map(|(&v, &m)| v * m)
        .sum()
}

#[test]
fn stretched_link_pulls_particles_together() {
    // Rest length 1, then stretched to 1.5 before the first step.
    let mut system = pair(1.0, 100.0, 0.0);
    system.set_position(1, Vec3::new(1.5, 0.0, 0.0));
    let mut carrier = CarrierBody::default();

    let integrator = Integrator::new(4);
    integrator.advance(&mut system, &mut carrier, &FreeSpace, 0.016);

    let velocities = system.velocities();
    assert!(velocities[0].x > 0.0, "left particle should move right");
    assert!(velocities[1].x < 0.0, "right particle should move left");
    assert!(separation(&system) < 1.5, "separation should shrink toward rest");
}

#[test]
fn internal_forces_conserve_momentum() {
    let mut system = pair(1.0, 100.0, 0.0);
    system.set_position(1, Vec3::new(1.2, 0.0, 0.0));
    system.set_velocity(0, Vec3::new(0.3, 0.0, 0.0));
    system.set_velocity(1, Vec3::new(0.1, 0.0, 0.0));
    let initial = momentum(&system);

    let mut carrier = CarrierBody::default();
    let integrator = Integrator::new(4);
    for _ in 0..100 {
        integrator.advance(&mut system, &mut carrier, &FreeSpace, 0.01);
    }

    let drift = (momentum(&system) - initial).length();
    assert!(drift < 1e-4, "momentum drift {drift} too large");
}

#[test]
fn stretched_link_oscillates_and_stays_bounded() {
    // Relative motion of an equal-mass pair obeys u'' = -2k u, so the
    // expected angular frequency is sqrt(2k) and the half-period
    // pi / sqrt(2k) ≈ 0.222 s for k = 100.
    let mut system = pair(1.0, 100.0, 0.0);
    system.set_position(1, Vec3::new(1.2, 0.0, 0.0));
    let mut carrier = CarrierBody::default();
    let integrator = Integrator::new(4);

    let dt = 0.01;
    let mut crossings = 0;
    let mut previous = separation(&system) - 1.0;
    for step in 0..400 {
        integrator.advance(&mut system, &mut carrier, &FreeSpace, dt);
        let sep = separation(&system);
        assert!(sep.is_finite(), "diverged at step {step}");
        assert!(
            (0.75..=1.25).contains(&sep),
            "separation {sep} escaped bounds at step {step}"
        );
        let displacement = sep - 1.0;
        if displacement * previous < 0.0 {
            crossings += 1;
        }
        previous = displacement;
    }

    // 4 s of simulation holds ~18 half-periods; allow generous slack for
    // discretization and the implicit-correction damping.
    assert!(
        (14..=22).contains(&crossings),
        "unexpected crossing count {crossings}"
    );
}

#[test]
fn carrier_wrench_is_applied_uniformly_and_drained_once() {
    let mut system = pair(1.0, 100.0, 0.0);
    let mut carrier = CarrierBody::new(2.0, Mat3::IDENTITY);
    carrier.apply_force(Vec3::new(0.0, -19.62, 0.0));

    let integrator = Integrator::new(4);
    let dt = 0.016;
    integrator.advance(&mut system, &mut carrier, &FreeSpace, dt);

    // force * inv_mass = -9.81, accumulated over one full step.
    for velocity in system.velocities() {
        assert_relative_eq!(velocity.y, -9.81 * dt, epsilon = 1e-4);
    }
    assert_eq!(carrier.external_force, Vec3::ZERO);

    // No new force: the accumulator was cleared, velocity stays put.
    let before = system.velocities()[0].y;
    integrator.advance(&mut system, &mut carrier, &FreeSpace, dt);
    assert_relative_eq!(system.velocities()[0].y, before, epsilon = 1e-5);
}

#[test]
fn torque_writes_angular_velocity_back_to_the_carrier() {
    let mut system = pair(1.0, 100.0, 0.0);
    let mut carrier = CarrierBody::new(1.0, Mat3::IDENTITY);
    carrier.apply_torque(Vec3::new(0.0, 0.0, 2.0));

    let dt = 0.016;
    Integrator::new(4).advance(&mut system, &mut carrier, &FreeSpace, dt);

    assert_relative_eq!(carrier.omega.z, 2.0 * dt, epsilon = 1e-6);
    assert_eq!(carrier.external_torque, Vec3::ZERO);
    assert_eq!(carrier.alpha, Vec3::ZERO);
}

/// Flat floor below every particle: y-up normal, fixed friction.
struct Floor {
    friction: f32,
}

impl ContactCoupling for Floor {
    fn sample(&self, _dt: f32, particle_count: usize) -> ContactSet {
        ContactSet {
            normals: vec![Vec3::Y; particle_count],
            normal_accelerations: vec![Vec3::ZERO; particle_count],
            friction_coefficients: vec![self.friction; particle_count],
        }
    }
}

#[test]
fn zero_tangential_velocity_yields_zero_friction() {
    let mut system = ParticleSystem::build(&[0.0, 0.0, 0.0], 3, &[1.0], &[], &[], &[]).unwrap();
    let mut carrier = CarrierBody::default();
    carrier.apply_force(Vec3::new(0.0, -9.81, 0.0));

    Integrator::new(4).advance(&mut system, &mut carrier, &Floor { friction: 0.8 }, 0.016);

    // Gravity is cancelled along the contact normal and there is no
    // tangential motion for friction to act on.
    let velocity = system.velocities()[0];
    assert!(velocity.length() < 1e-6, "velocity {velocity} should stay zero");
}

#[test]
fn friction_decelerates_tangential_motion() {
    let mut system = ParticleSystem::build(&[0.0, 0.0, 0.0], 3, &[1.0], &[], &[], &[]).unwrap();
    system.set_velocity(0, Vec3::new(1.0, 0.0, 0.0));
    let mut carrier = CarrierBody::default();
    carrier.apply_force(Vec3::new(0.0, -9.81, 0.0));

    Integrator::new(4).advance(&mut system, &mut carrier, &Floor { friction: 0.5 }, 0.016);

    let velocity = system.velocities()[0];
    assert!(velocity.x < 1.0, "friction should slow the slide");
    assert!(velocity.x > 0.9, "one step should not stop it");
    assert!(velocity.y.abs() < 1e-5, "normal component should be removed");
}

#[test]
fn zero_contact_normal_means_free_fall() {
    let mut system = ParticleSystem::build(&[0.0, 0.0, 0.0], 3, &[1.0], &[], &[], &[]).unwrap();
    let mut carrier = CarrierBody::default();
    carrier.apply_force(Vec3::new(0.0, -9.81, 0.0));

    let dt = 0.016;
    Integrator::new(4).advance(&mut system, &mut carrier, &FreeSpace, dt);

    assert_relative_eq!(system.velocities()[0].y, -9.81 * dt, epsilon = 1e-4);
}

#[test]
fn near_coincident_particles_do_not_blow_up() {
    let points = [
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0,
    ];
    let mut system =
        ParticleSystem::build(&points, 3, &[1.0, 1.0], &[[0, 1]], &[100.0], &[2.0]).unwrap();
    // Force the endpoints almost on top of each other after the build.
    system.set_position(1, Vec3::new(1.0e-6, 0.0, 0.0));

    let mut carrier = CarrierBody::default();
    let integrator = Integrator::new(4);
    for _ in 0..50 {
        integrator.advance(&mut system, &mut carrier, &FreeSpace, 0.01);
        for position in system.positions() {
            assert!(position.is_finite());
        }
    }
}
