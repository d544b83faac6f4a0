//! High-level deformable body composing the network, its carrier, and the
//! integrator behind a narrow capability contract.

use glam::Vec3;

use crate::core::{CarrierBody, ParticleSystem};
use crate::dynamics::{ContactCoupling, FreeSpace, Integrator};

/// Capability contract for a body that deforms over time.
///
/// Generic body containers compose this instead of inheriting from a
/// shared collision-shape hierarchy: state access plus one advance
/// operation is the whole surface.
pub trait DeformableBody {
    fn particle_count(&self) -> usize;
    fn positions(&self) -> &[Vec3];
    fn velocities(&self) -> &[Vec3];
    /// Advances the body by `dt` seconds.
    fn advance(&mut self, dt: f32);
}

/// Mass-spring-damper deformable body.
///
/// Owns its particle network and carrier exclusively; a call to
/// [`advance`](DeformableBody::advance) assumes no other writer touches
/// either during the call.
pub struct SoftBody {
    pub system: ParticleSystem,
    pub carrier: CarrierBody,
    pub integrator: Integrator,
    contacts: Box<dyn ContactCoupling>,
}

impl SoftBody {
    /// Wraps a built network and its carrier with the default integrator
    /// and a contact-free coupling.
    pub fn new(system: ParticleSystem, carrier: CarrierBody) -> Self {
        Self {
            system,
            carrier,
            integrator: Integrator::default(),
            contacts: Box::new(FreeSpace),
        }
    }

    /// Replaces the contact source queried once per step.
    pub fn set_contact_coupling<C>(&mut self, contacts: C)
    where
        C: ContactCoupling + 'static,
    {
        self.contacts = Box::new(contacts);
    }
}

impl DeformableBody for SoftBody {
    fn particle_count(&self) -> usize {
        self.system.particle_count()
    }

    fn positions(&self) -> &[Vec3] {
        self.system.positions()
    }

    fn velocities(&self) -> &[Vec3] {
        self.system.velocities()
    }

    fn advance(&mut self, dt: f32) {
        self.integrator
            .advance(&mut self.system, &mut self.carrier, &*self.contacts, dt);
    }
}
