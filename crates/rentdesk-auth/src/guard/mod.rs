//! The authorization guard.
//!
//! Every handler and service asks the guard before touching data. The
//! guard only reads the [`TenantContext`](crate::context::TenantContext);
//! it never performs I/O.

pub mod capability;
pub mod decision;
pub mod enforcer;

pub use capability::Capability;
pub use decision::{AuthorizationDecision, DenialReason, MalformedRequest};
pub use enforcer::AuthorizationGuard;
