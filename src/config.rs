//! Global configuration constants for the Soft Lattice core.

/// Default integration timestep (in seconds).
pub const DEFAULT_TIME_STEP: f32 = 1.0 / 60.0;

/// Number of sub-steps a full timestep is split into by the integrator.
pub const DEFAULT_SUBSTEPS: u32 = 4;

/// Smallest admissible link length. Links shorter than this at build time
/// are rejected; at runtime the squared length is clamped to its square.
pub const MIN_LINK_LENGTH: f32 = 1.0e-2;

/// Additive guard on squared tangential speed before the friction division.
pub const FRICTION_EPSILON: f32 = 1.0e-14;
