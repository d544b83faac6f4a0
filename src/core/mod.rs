//! Core types describing the deformable particle network and its carrier.

pub mod carrier;
pub mod link;
pub mod system;

pub use carrier::{CarrierBody, ExternalWrench};
pub use link::SpringDamperLink;
pub use system::ParticleSystem;
