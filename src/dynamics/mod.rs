//! Deformable-body dynamics: contact coupling and the sub-stepped integrator.

pub mod contact;
pub mod integrator;

pub use contact::{ContactCoupling, ContactSet, FreeSpace};
pub use integrator::Integrator;
