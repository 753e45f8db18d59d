//! Team membership entities.

pub mod model;
pub mod role;

pub use model::{NewMembership, TeamMembership};
pub use role::MemberRole;
