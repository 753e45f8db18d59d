//! # rentdesk-auth
//!
//! The multi-tenant boundary of RentDesk: everything between an inbound
//! request's `Host` header and a yes/no answer for a capability.
//!
//! ## Modules
//!
//! - `host` — maps a `Host` header onto a landlord slug; slug validation
//! - `session` — HS256 session token encoding and decoding
//! - `context` — per-request immutable tenant context and its assembly
//! - `guard` — the authorization guard (pure capability checks)
//! - `membership` — team membership mutation policy

pub mod context;
pub mod guard;
pub mod host;
pub mod membership;
pub mod session;

pub use context::{ContextError, TenantContext, TenantContextBuilder, TenantRef, TenantRelationship};
pub use guard::{AuthorizationDecision, AuthorizationGuard, Capability, DenialReason, MalformedRequest};
pub use host::{HostResolver, resolve, validate_slug};
pub use session::{SessionClaims, SessionDecoder, SessionEncoder};
