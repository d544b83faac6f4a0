use serde::{Deserialize, Serialize};

/// A spring-damper constraint joining exactly two particles.
///
/// `spring` is an acceleration per unit compression (1/s²) and `damper`
/// an acceleration per unit closing speed (1/s); neither is a force
/// constant, so particle mass never enters the link response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpringDamperLink {
    /// Smaller endpoint index. Canonical ordering: `m0 < m1`.
    pub m0: usize,
    /// Larger endpoint index.
    pub m1: usize,
    pub spring: f32,
    pub damper: f32,
    /// Endpoint distance at build time, fixed for the link's lifetime.
    pub rest_length: f32,
}
