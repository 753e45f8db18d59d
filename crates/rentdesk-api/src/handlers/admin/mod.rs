//! Platform operator handlers. Every route requires a super-admin session.

pub mod properties;
pub mod tenants;
