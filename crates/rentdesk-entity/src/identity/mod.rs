//! Session identity entities.

pub mod model;
pub mod role;

pub use model::SessionIdentity;
pub use role::SessionRole;
