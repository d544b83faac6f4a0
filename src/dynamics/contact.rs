use glam::Vec3;

/// Per-particle collision response sampled once per full timestep.
///
/// A zero `normal` marks a particle as contact-free: the normal and
/// friction adjustments both degenerate to zero for it. Each array is
/// `particle_count` entries long.
#[derive(Debug, Clone, Default)]
pub struct ContactSet {
    pub normals: Vec<Vec3>,
    pub normal_accelerations: Vec<Vec3>,
    pub friction_coefficients: Vec<f32>,
}

impl ContactSet {
    /// Contact-free state for every particle.
    pub fn free(particle_count: usize) -> Self {
        Self {
            normals: vec![Vec3::ZERO; particle_count],
            normal_accelerations: vec![Vec3::ZERO; particle_count],
            friction_coefficients: vec![0.0; particle_count],
        }
    }
}

/// Source of per-particle contact data, supplied by the surrounding
/// collision pipeline. Sampled once per full step; the result is held
/// fixed across every sub-step of that call.
pub trait ContactCoupling: Send + Sync {
    fn sample(&self, dt: f32, particle_count: usize) -> ContactSet;
}

/// Neutral contact source: no particle touches anything.
pub struct FreeSpace;

impl ContactCoupling for FreeSpace {
    fn sample(&self, _dt: f32, particle_count: usize) -> ContactSet {
        ContactSet::free(particle_count)
    }
}
