//! Error types raised while building a particle/link network.
//!
//! Construction is the only fallible surface of the crate: a failed build
//! exposes no partial network, and the runtime path handles its edge cases
//! with numeric clamps instead of errors.

use std::fmt;

/// Convenient alias for build results.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors reported by [`ParticleSystem::build`](crate::ParticleSystem::build).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuildError {
    /// A particle was supplied with a non-positive mass.
    InvalidInput { particle: usize, mass: f32 },
    /// A link references equal or out-of-range endpoints, or its endpoints
    /// start closer together than the minimal admissible length.
    DegenerateLink { link: usize, m0: usize, m1: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::InvalidInput { particle, mass } => {
                write!(f, "particle {particle} has non-positive mass {mass}")
            }
            BuildError::DegenerateLink { link, m0, m1 } => {
                write!(
                    f,
                    "link {link} ({m0}, {m1}) is degenerate: endpoints equal, out of range, or coincident"
                )
            }
        }
    }
}

impl std::error::Error for BuildError {}
