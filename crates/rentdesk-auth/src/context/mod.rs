//! Per-request tenant context and its assembly.

pub mod builder;
pub mod error;
pub mod model;

pub use builder::TenantContextBuilder;
pub use error::ContextError;
pub use model::{TenantContext, TenantRef, TenantRelationship};
