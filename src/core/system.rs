use glam::Vec3;
use log::debug;

use super::link::SpringDamperLink;
use crate::config::MIN_LINK_LENGTH;
use crate::error::{BuildError, Result};

/// Particle state and link network of a deformable body, stored SoA.
///
/// Built once from raw input arrays, mutated in place every step by the
/// integrator, and owned exclusively by its carrier for its lifetime.
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    pub(crate) positions: Vec<Vec3>,
    pub(crate) velocities: Vec<Vec3>,
    pub(crate) accelerations: Vec<Vec3>,
    pub(crate) masses: Vec<f32>,
    pub(crate) inv_masses: Vec<f32>,
    pub(crate) links: Vec<SpringDamperLink>,
    /// Squared floor clamped onto link lengths before any division.
    pub(crate) min_length2: f32,
    total_mass: f32,
}

impl ParticleSystem {
    /// Validates and builds the network from raw arrays.
    ///
    /// `points` holds one position per particle, `stride` elements apart
    /// (the first three elements of each group are x, y, z). `links` pairs
    /// particle indices; endpoint order is canonicalized to (min, max).
    ///
    /// Fails with [`BuildError::InvalidInput`] on a non-positive mass and
    /// [`BuildError::DegenerateLink`] on equal/out-of-range endpoints or a
    /// rest length at or below [`MIN_LINK_LENGTH`]. Any failure aborts the
    /// whole build.
    pub fn build(
        points: &[f32],
        stride: usize,
        masses: &[f32],
        links: &[[usize; 2]],
        springs: &[f32],
        dampers: &[f32],
    ) -> Result<Self> {
        let particle_count = masses.len();
        debug_assert!(stride >= 3);
        debug_assert!(points.len() >= particle_count * stride);
        debug_assert_eq!(springs.len(), links.len());
        debug_assert_eq!(dampers.len(), links.len());

        let mut positions = Vec::with_capacity(particle_count);
        let mut inv_masses = Vec::with_capacity(particle_count);
        let mut total_mass = 0.0;
        for (i, &mass) in masses.iter().enumerate() {
            if mass <= 0.0 {
                return Err(BuildError::InvalidInput { particle: i, mass });
            }
            total_mass += mass;
            inv_masses.push(1.0 / mass);
            let base = i * stride;
            positions.push(Vec3::new(points[base], points[base + 1], points[base + 2]));
        }

        let mut link_list = Vec::with_capacity(links.len());
        for (i, pair) in links.iter().enumerate() {
            let [v0, v1] = *pair;
            if v0 == v1 || v0 >= particle_count || v1 >= particle_count {
                return Err(BuildError::DegenerateLink {
                    link: i,
                    m0: v0,
                    m1: v1,
                });
            }
            let rest_length = positions[v0].distance(positions[v1]);
            if rest_length <= MIN_LINK_LENGTH {
                return Err(BuildError::DegenerateLink {
                    link: i,
                    m0: v0,
                    m1: v1,
                });
            }
            link_list.push(SpringDamperLink {
                m0: v0.min(v1),
                m1: v0.max(v1),
                spring: springs[i],
                damper: dampers[i],
                rest_length,
            });
        }

        debug!(
            "built particle system: {} particles, {} links, total mass {:.3}",
            particle_count,
            link_list.len(),
            total_mass
        );

        Ok(Self {
            positions,
            velocities: vec![Vec3::ZERO; particle_count],
            accelerations: vec![Vec3::ZERO; particle_count],
            masses: masses.to_vec(),
            inv_masses,
            links: link_list,
            min_length2: MIN_LINK_LENGTH * MIN_LINK_LENGTH,
            total_mass,
        })
    }

    pub fn particle_count(&self) -> usize {
        self.positions.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn masses(&self) -> &[f32] {
        &self.masses
    }

    /// Exact reciprocals of [`masses`](Self::masses).
    pub fn inv_masses(&self) -> &[f32] {
        &self.inv_masses
    }

    pub fn links(&self) -> &[SpringDamperLink] {
        &self.links
    }

    /// Arithmetic sum of all particle masses.
    pub fn total_mass(&self) -> f32 {
        self.total_mass
    }

    pub fn set_position(&mut self, particle: usize, position: Vec3) {
        self.positions[particle] = position;
    }

    pub fn set_velocity(&mut self, particle: usize, velocity: Vec3) {
        self.velocities[particle] = velocity;
    }

    /// Scratch memory one integrator call allocates for this system.
    pub fn working_memory_bytes(&self) -> usize {
        let vec3 = std::mem::size_of::<Vec3>();
        let scalar = std::mem::size_of::<f32>();
        self.links.len() * (3 * vec3 + 2 * scalar)
            + self.positions.len() * (2 * vec3 + scalar)
    }
}
