use glam::Vec3;

use super::contact::ContactCoupling;
use crate::config::{DEFAULT_SUBSTEPS, FRICTION_EPSILON};
use crate::core::{CarrierBody, ParticleSystem};
use crate::utils::logging::ScopedTimer;

/// Sub-stepped integrator advancing a particle network forward in time.
///
/// A full timestep is split into `substeps` equal slices; stiff spring
/// coefficients that would diverge under one explicit step stay stable
/// across the smaller slices, helped by a linearized implicit treatment
/// of the damping term applied in a second link pass.
#[derive(Debug, Clone)]
pub struct Integrator {
    pub substeps: u32,
}

impl Default for Integrator {
    fn default() -> Self {
        Self::new(DEFAULT_SUBSTEPS)
    }
}

impl Integrator {
    pub fn new(substeps: u32) -> Self {
        Self {
            substeps: substeps.max(1),
        }
    }

    /// Advances `system` by `dt`.
    ///
    /// Contact state is sampled once and the carrier's wrench drained once
    /// per call; both are held constant across every sub-step. Internal
    /// link forces are accumulated pairwise with strict action/reaction,
    /// so they never change the network's total momentum. Velocity updates
    /// precede and feed the position updates within each sub-step.
    pub fn advance(
        &self,
        system: &mut ParticleSystem,
        carrier: &mut CarrierBody,
        contacts: &dyn ContactCoupling,
        dt: f32,
    ) {
        let _timer = ScopedTimer::new("integrator::advance");

        let particle_count = system.particle_count();
        let link_count = system.link_count();

        let contact = contacts.sample(dt, particle_count);
        debug_assert_eq!(contact.normals.len(), particle_count);
        debug_assert_eq!(contact.normal_accelerations.len(), particle_count);
        debug_assert_eq!(contact.friction_coefficients.len(), particle_count);

        let wrench = carrier.drain();
        // Distributed forcing is not modeled yet; every particle sees the
        // same carrier acceleration.
        let external_accel = wrench.force * wrench.inv_mass;
        carrier.omega = wrench.inv_world_inertia * (wrench.torque * dt);
        carrier.alpha = Vec3::ZERO;

        // Scratch buffers live for this call only.
        let mut dx = vec![Vec3::ZERO; link_count];
        let mut dv = vec![Vec3::ZERO; link_count];
        let mut dpdv = vec![Vec3::ZERO; link_count];
        let mut spring_a01 = vec![0.0f32; link_count];
        let mut spring_b01 = vec![0.0f32; link_count];

        let substep_dt = dt / self.substeps as f32;

        for _ in 0..self.substeps {
            for accel in &mut system.accelerations {
                *accel = Vec3::ZERO;
            }

            for (i, link) in system.links.iter().enumerate() {
                let j0 = link.m0;
                let j1 = link.m1;
                dv[i] = system.velocities[j0] - system.velocities[j1];
                dx[i] = system.positions[j0] - system.positions[j1];

                // Silent clamp: near-coincident endpoints must not blow up
                // the division below.
                let length2 = dx[i].length_squared().max(system.min_length2);
                let length = length2.sqrt();
                let inv_length = 1.0 / length;
                let length_ratio = link.rest_length * inv_length;
                let compression = 1.0 - length_ratio;

                let spring_force = dx[i] * (link.spring * compression);
                let damper_force =
                    dx[i] * (link.damper * inv_length * inv_length * dv[i].dot(dx[i]));

                dpdv[i] = dx[i] * dv[i];
                system.accelerations[j0] -= spring_force + damper_force;
                system.accelerations[j1] += spring_force + damper_force;

                let ks_dt = -substep_dt * link.spring;
                spring_a01[i] = ks_dt * compression;
                spring_b01[i] = ks_dt * length_ratio * inv_length * inv_length;
            }

            // Second pass: linearized one-step-implicit correction of the
            // spring/damper response. Runs only after the force pass has
            // finished for every link.
            for (i, link) in system.links.iter().enumerate() {
                let dfdx = dv[i] * spring_a01[i] + dx[i] * dpdv[i] * spring_b01[i];
                system.accelerations[link.m0] += dfdx;
                system.accelerations[link.m1] -= dfdx;
            }

            for i in 0..particle_count {
                let normal = contact.normals[i];
                let veloc = system.velocities[i];
                let mut net_accel = system.accelerations[i] + external_accel;

                let tangent = veloc - normal * normal.dot(veloc);
                let tangent_mag2 = tangent.length_squared() + FRICTION_EPSILON;

                let normal_accel_mag = net_accel.dot(normal).abs();
                let friction = tangent
                    * (contact.friction_coefficients[i] * normal_accel_mag
                        / tangent_mag2.sqrt());

                let along_normal = normal * net_accel.dot(normal);
                net_accel =
                    net_accel + contact.normal_accelerations[i] - along_normal - friction;

                system.velocities[i] += net_accel * substep_dt;
                let veloc = system.velocities[i];
                system.positions[i] += veloc * substep_dt;
            }
        }
    }
}
