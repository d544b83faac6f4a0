//! Soft Lattice – a mass-spring-damper deformable body core for Rust.
//!
//! This crate simulates a deformable body as a network of point masses
//! joined by spring-damper links, riding on a rigid carrier. Each physics
//! timestep is advanced by a sub-stepped explicit integrator with a
//! linearized implicit correction of the damping term, coupled with an
//! externally supplied carrier wrench and per-particle contact response.

pub mod body;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod utils;

pub use glam::{Mat3, Vec3};

pub use crate::body::{DeformableBody, SoftBody};
pub use crate::core::{
    carrier::{CarrierBody, ExternalWrench},
    link::SpringDamperLink,
    system::ParticleSystem,
};
pub use crate::dynamics::{
    contact::{ContactCoupling, ContactSet, FreeSpace},
    integrator::Integrator,
};
pub use crate::error::{BuildError, Result};
