use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};

/// Accumulated external forcing read off a carrier in one drain.
#[derive(Debug, Clone, Copy)]
pub struct ExternalWrench {
    pub force: Vec3,
    pub torque: Vec3,
    pub inv_mass: f32,
    pub inv_world_inertia: Mat3,
}

/// The rigid body a deformable network rides on.
///
/// Only the state the deformable core reads and clears lives here; the
/// carrier's own dynamics are maintained by the surrounding simulation.
/// Force and torque accumulate between steps and are consumed whole by a
/// single [`drain`](CarrierBody::drain) per step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierBody {
    pub external_force: Vec3,
    pub external_torque: Vec3,
    pub inv_mass: f32,
    pub inv_world_inertia: Mat3,
    /// Angular velocity written back by the integrator.
    pub omega: Vec3,
    /// Angular acceleration written back by the integrator.
    pub alpha: Vec3,
}

impl Default for CarrierBody {
    fn default() -> Self {
        Self::new(1.0, Mat3::IDENTITY)
    }
}

impl CarrierBody {
    pub fn new(mass: f32, inertia: Mat3) -> Self {
        let inv_mass = if mass.abs() < f32::EPSILON {
            0.0
        } else {
            1.0 / mass
        };
        let inv_world_inertia = if inertia.determinant().abs() < f32::EPSILON {
            Mat3::IDENTITY
        } else {
            inertia.inverse()
        };
        Self {
            external_force: Vec3::ZERO,
            external_torque: Vec3::ZERO,
            inv_mass,
            inv_world_inertia,
            omega: Vec3::ZERO,
            alpha: Vec3::ZERO,
        }
    }

    pub fn apply_force(&mut self, force: Vec3) {
        self.external_force += force;
    }

    pub fn apply_torque(&mut self, torque: Vec3) {
        self.external_torque += torque;
    }

    /// Returns the accumulated wrench and zeroes the accumulators.
    ///
    /// The integrator is the sole caller during a step; a unit of force
    /// applied to the carrier is consumed exactly once.
    pub fn drain(&mut self) -> ExternalWrench {
        let wrench = ExternalWrench {
            force: self.external_force,
            torque: self.external_torque,
            inv_mass: self.inv_mass,
            inv_world_inertia: self.inv_world_inertia,
        };
        self.external_force = Vec3::ZERO;
        self.external_torque = Vec3::ZERO;
        wrench
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_returns_accumulated_wrench_and_clears() {
        let mut carrier = CarrierBody::new(2.0, Mat3::IDENTITY);
        carrier.apply_force(Vec3::new(1.0, 2.0, 3.0));
        carrier.apply_force(Vec3::new(1.0, 0.0, 0.0));
        carrier.apply_torque(Vec3::Y);

        let wrench = carrier.drain();
        assert_eq!(wrench.force, Vec3::new(2.0, 2.0, 3.0));
        assert_eq!(wrench.torque, Vec3::Y);
        assert!((wrench.inv_mass - 0.5).abs() < 1e-6);

        let second = carrier.drain();
        assert_eq!(second.force, Vec3::ZERO);
        assert_eq!(second.torque, Vec3::ZERO);
    }

    #[test]
    fn zero_mass_carrier_gets_zero_inverse_mass() {
        let carrier = CarrierBody::new(0.0, Mat3::IDENTITY);
        assert_eq!(carrier.inv_mass, 0.0);
    }
}
