//! Team management service.

pub mod service;

pub use service::{AddMemberRequest, ChangeRoleRequest, TeamService};
